use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read, Result};
use std::path::Path;

use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
///
/// # Returns
///
/// A `BufReader` object for a given file path or stdin.
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const TEXT: &str = "seeds: 1 2\n\na-to-b map:\n3 1 1\n";

    #[rstest]
    fn test_reads_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("almanac.txt");
        std::fs::write(&path, TEXT).unwrap();

        let mut out = String::new();
        get_dynamic_reader(&path)
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, TEXT);
    }

    #[rstest]
    fn test_reads_gzipped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("almanac.txt.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(TEXT.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let mut out = String::new();
        get_dynamic_reader_w_stdin(path.to_str().unwrap())
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, TEXT);
    }

    #[rstest]
    fn test_missing_file_is_an_error() {
        assert!(get_dynamic_reader(Path::new("does/not/exist.txt")).is_err());
    }
}
