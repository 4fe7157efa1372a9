//! # Errors
//!
//! Invalid answers are never reported through [`PromptError`]: the reprompt
//! loop absorbs them. What remains are failures of the surrounding plumbing,
//! the input stream closing, an I/O error, or a misconfigured prompt.
use thiserror::Error;

/// Errors returned by the prompt machinery.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The line source reached end of input before a valid value was entered.
    #[error("input stream closed before a valid value was entered")]
    Closed,

    /// Reading from the line source or writing through the printer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line was requested while the source was paused.
    #[error("the line source was read while paused")]
    Paused,

    /// The requested value type is not one of the supported names.
    #[error("unknown input type '{0}', expected one of: string, integer, float, number, boolean")]
    UnknownType(String),

    /// Prompt options could not be decoded.
    #[error("invalid prompt options: {0}")]
    Options(#[from] serde_json::Error),

    /// An accepted answer could not be encoded for output.
    #[error("failed to encode answer: {0}")]
    Encode(#[source] serde_json::Error),
}
