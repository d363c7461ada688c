use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::*;

use almanac::core::errors::{AlmanacError, ConfigError};
use almanac::core::models::Almanac;
use almanac::remap::{Part, RemapConfig, Solution, Solver};

#[fixture]
fn path_to_example() -> &'static str {
    "tests/data/example.txt"
}

#[fixture]
fn path_to_example_gzipped() -> &'static str {
    "tests/data/example.txt.gz"
}

#[fixture]
fn path_to_example_crlf() -> &'static str {
    "tests/data/example_crlf.txt"
}

#[fixture]
fn path_to_wide_ranges() -> &'static str {
    "tests/data/wide_ranges.txt"
}

fn load(path: &str) -> Almanac<u64> {
    Almanac::try_from(Path::new(path)).unwrap()
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_example_end_to_end(path_to_example: &str) {
        let almanac = load(path_to_example);
        assert_eq!(almanac.pipeline.len(), 7);
        assert_eq!(almanac.seeds.scalars(), &[79, 14, 55, 13]);

        let solution = Solver::new(&almanac, RemapConfig::default()).solve().unwrap();
        assert_eq!(
            solution,
            Solution {
                part_one: Some(35),
                part_two: Some(46)
            }
        );
    }

    #[rstest]
    fn test_gzipped_and_crlf_inputs_match(
        path_to_example: &str,
        path_to_example_gzipped: &str,
        path_to_example_crlf: &str,
    ) {
        let plain = load(path_to_example);
        assert_eq!(load(path_to_example_gzipped), plain);
        assert_eq!(load(path_to_example_crlf), plain);
    }

    #[rstest]
    fn test_from_input_reads_paths(path_to_example_gzipped: &str) {
        let almanac: Almanac<u64> = Almanac::from_input(path_to_example_gzipped).unwrap();
        assert_eq!(almanac.pipeline.stages()[0].name(), "seed-to-soil");
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some(2), false)]
    #[case(Some(2), true)]
    fn test_wide_ranges(
        path_to_wide_ranges: &str,
        #[case] threads: Option<usize>,
        #[case] coalesce: bool,
    ) {
        let almanac = load(path_to_wide_ranges);
        let config = RemapConfig {
            threads,
            coalesce,
            part: Part::Both,
            progress: false,
        };
        let solution = Solver::new(&almanac, config).solve().unwrap();
        assert_eq!(solution.part_one, Some(0));
        assert_eq!(solution.part_two, Some(17));
    }

    #[rstest]
    fn test_overlapping_rules_are_rejected() {
        let result: Result<Almanac<u64>, _> =
            Almanac::try_from(Path::new("tests/data/overlapping_rules.txt"));
        match result {
            Err(AlmanacError::Config(ConfigError::OverlappingRules {
                stage,
                first_line,
                second_line,
            })) => {
                assert_eq!(stage, "seed-to-soil");
                assert_eq!((first_line, second_line), (4, 5));
            }
            other => panic!("expected overlapping rules, got {other:?}"),
        }
    }

    #[rstest]
    fn test_missing_separator_is_rejected() {
        let result: Result<Almanac<u64>, _> =
            Almanac::try_from(Path::new("tests/data/missing_separator.txt"));
        assert!(matches!(
            result,
            Err(AlmanacError::Config(ConfigError::MissingSeparator { line: 2, .. }))
        ));
    }

    #[rstest]
    fn test_missing_file_is_io_error() {
        let result: Result<Almanac<u64>, _> =
            Almanac::try_from(Path::new("tests/data/does_not_exist.txt"));
        assert!(matches!(result, Err(AlmanacError::Io(_))));
    }
}
