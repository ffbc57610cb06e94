//! Error types for doi-utils

use thiserror::Error;

/// Result type alias for typed DOI parsing
pub type Result<T> = std::result::Result<T, DoiError>;

/// Why a string could not be turned into a [`DoiPart`](crate::DoiPart).
///
/// The boolean/optional surface (`normalize`, `validate`) collapses all of
/// these into "no DOI"; only the typed parsing path reports them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DoiError {
    /// Input was empty or whitespace
    #[error("empty input")]
    Empty,

    /// No DOI could be located in the input
    #[error("no DOI found in {0:?}")]
    NotFound(String),

    /// A candidate was located but does not match the DOI grammar
    #[error("invalid DOI syntax: {0:?}")]
    InvalidSyntax(String),
}
