//! Error types for the sheetlink command line

use thiserror::Error;

/// Errors raised while parsing arguments or preparing a run
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{option} requires {what}")]
    MissingValue {
        option: &'static str,
        what: &'static str,
    },

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("Invalid index for --set: {0}")]
    InvalidIndex(String),

    #[error("No sheet given: pass a CSV file or set [sheet] path in the config")]
    NoSheet,
}
