use thiserror::Error;

use almanac_core::errors::{ConfigError, EmptyResultError};

#[derive(Error, Debug)]
pub enum RemapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    EmptyResult(#[from] EmptyResultError),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type RemapResult<T> = std::result::Result<T, RemapError>;
