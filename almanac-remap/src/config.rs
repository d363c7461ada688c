use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which answers to compute.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    /// minimum over scalar seeds
    One,
    /// minimum over seed ranges
    Two,
    #[default]
    Both,
}

impl Part {
    pub fn includes_one(&self) -> bool {
        matches!(self, Part::One | Part::Both)
    }

    pub fn includes_two(&self) -> bool {
        matches!(self, Part::Two | Part::Both)
    }
}

impl FromStr for Part {
    type Err = RemapConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "one" | "1" | "p1" => Ok(Part::One),
            "two" | "2" | "p2" => Ok(Part::Two),
            "both" | "all" => Ok(Part::Both),
            _ => Err(RemapConfigError::InvalidPart(s.to_string())),
        }
    }
}

/// How to run a solve.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RemapConfig {
    /// Worker threads for seed ranges. `None` or 1 runs on the calling thread.
    pub threads: Option<usize>,
    /// Merge overlapping intervals after every stage.
    pub coalesce: bool,
    pub part: Part,
    /// Show a progress bar over seed ranges.
    pub progress: bool,
}

#[derive(Error, Debug)]
pub enum RemapConfigError {
    #[error("Invalid part {0:?}. Valid options are `one`, `two` or `both`")]
    InvalidPart(String),
    #[error("Thread count must be at least 1")]
    ZeroThreads,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type RemapConfigResult<T> = std::result::Result<T, RemapConfigError>;

impl RemapConfig {
    /// Whether seed ranges should be spread over a thread pool.
    pub fn is_parallel(&self) -> bool {
        self.threads.is_some_and(|n| n > 1)
    }

    fn validate(self) -> RemapConfigResult<Self> {
        if self.threads == Some(0) {
            return Err(RemapConfigError::ZeroThreads);
        }
        Ok(self)
    }
}

impl FromStr for RemapConfig {
    type Err = RemapConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: RemapConfig = toml::from_str(s)?;
        config.validate()
    }
}

impl TryFrom<&Path> for RemapConfig {
    type Error = RemapConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        toml_str.parse()
    }
}
