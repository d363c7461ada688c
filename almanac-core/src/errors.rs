use thiserror::Error;

/// Reasons an [`Interval`](crate::models::Interval) or
/// [`RangeRule`](crate::models::RangeRule) can't be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("length must be greater than zero")]
    ZeroLength,

    #[error("end of range overflows the coordinate type")]
    EndOverflow,
}

/// Reasons a [`MapStage`](crate::models::MapStage) can't be built.
///
/// Rule positions are zero-based indices in declaration order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    #[error("rules #{first} and #{second} claim overlapping source values")]
    OverlappingRules { first: usize, second: usize },
}

/// A line of input doesn't match the token grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "line {line}: expected `<destination> <source> <length>`, found {found} token(s): {content:?}"
    )]
    RuleTokenCount {
        line: usize,
        found: usize,
        content: String,
    },

    #[error("line {line}: invalid non-negative integer {token:?} in {content:?}")]
    InvalidInteger {
        line: usize,
        token: String,
        content: String,
    },

    #[error("line {line}: expected a `<name> map:` header before rules, found {content:?}")]
    MissingHeader { line: usize, content: String },

    #[error("line {line}: malformed stage header {content:?}")]
    MalformedHeader { line: usize, content: String },

    #[error("line {line}: invalid rule {content:?}: {kind}")]
    InvalidRule {
        line: usize,
        content: String,
        #[source]
        kind: IntervalError,
    },
}

/// The document is well-tokenized but structurally invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing `seeds:` line before the first stage block")]
    MissingSeeds,

    #[error("line {line}: duplicate `seeds:` line (first declared on line {first_line})")]
    DuplicateSeeds { line: usize, first_line: usize },

    #[error("line {line}: expected a blank line before header {content:?}")]
    MissingSeparator { line: usize, content: String },

    #[error("stage {stage:?}: rules on lines {first_line} and {second_line} overlap")]
    OverlappingRules {
        stage: String,
        first_line: usize,
        second_line: usize,
    },

    #[error("line {line}: duplicate stage {name:?} (first declared on line {first_line})")]
    DuplicateStage {
        name: String,
        line: usize,
        first_line: usize,
    },

    #[error("no stage blocks found")]
    NoStages,

    #[error("{count} seed values can't be read as (start, length) pairs")]
    UnpairedSeed { count: usize },

    #[error("seed range #{index} has zero length")]
    EmptySeedRange { index: usize },

    #[error("seed range #{index} overflows the coordinate type")]
    SeedRangeOverflow { index: usize },
}

/// A minimum was requested over nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no values to take a minimum over")]
pub struct EmptyResultError;

#[derive(Error, Debug)]
pub enum AlmanacError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    EmptyResult(#[from] EmptyResultError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type AlmanacResult<T> = std::result::Result<T, AlmanacError>;
