use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use num_traits::{PrimInt, Unsigned};

use crate::errors::AlmanacError;
use crate::models::{Pipeline, SeedSpec};
use crate::parser::parse_almanac;
use crate::utils::{get_dynamic_reader, get_dynamic_reader_w_stdin};

///
/// A parsed input document: the seeds and the pipeline they run through.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Almanac<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    pub seeds: SeedSpec<I>,
    pub pipeline: Pipeline<I>,
}

impl<I> Almanac<I>
where
    I: PrimInt + Unsigned + Send + Sync + FromStr,
{
    ///
    /// Read an almanac from a path, or from stdin when the path is `-`.
    ///
    pub fn from_input(input: &str) -> Result<Self, AlmanacError> {
        let mut reader = get_dynamic_reader_w_stdin(input)?;
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        parse_almanac(&text)
    }
}

impl<I> FromStr for Almanac<I>
where
    I: PrimInt + Unsigned + Send + Sync + FromStr,
{
    type Err = AlmanacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_almanac(s)
    }
}

impl<I> TryFrom<&Path> for Almanac<I>
where
    I: PrimInt + Unsigned + Send + Sync + FromStr,
{
    type Error = AlmanacError;

    ///
    /// Create a new [Almanac] from a text file, gzipped or not.
    ///
    /// # Arguments:
    /// - value: path to the file on disk.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let mut reader = get_dynamic_reader(value)?;
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        parse_almanac(&text)
    }
}
