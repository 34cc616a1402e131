//! Errors raised by the command layer before any request is sent.

/// User-provided input failed validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
