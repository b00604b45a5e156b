use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("example {row} has no value for attribute '{attribute}'")]
    MissingValue { row: usize, attribute: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    #[error("test fraction must be in (0, 1), got {0}")]
    InvalidFraction(f64),

    #[error("cannot split an empty example set")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown criterion: '{0}' (expected id3, c45, cart or chaid)")]
    UnknownCriterion(String),

    #[error("at least one criterion must be selected")]
    NoCriteria,

    #[error("invalid test size: {0}")]
    InvalidTestSize(String),

    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("cannot induce a tree from an empty training set")]
    EmptyTrainingSet,
}

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Summary(#[from] SummaryError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
