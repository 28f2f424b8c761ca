//! Error types for the acta-core library.
//!
//! The matching engine itself never fails: unparseable numerals degrade to
//! passthrough, unmatched patterns become NOT_FOUND suggestions. Errors only
//! arise at the loading boundary, when turning operator-supplied input into
//! typed values.

use thiserror::Error;

/// Main error type for the acta library.
#[derive(Error, Debug)]
pub enum ActaError {
    /// Form values could not be deserialized.
    #[error("invalid form values: {0}")]
    Form(#[from] serde_json::Error),

    /// An act nature string was not recognized.
    #[error("unknown act nature: {0}")]
    UnknownNature(String),
}

/// Result type for the acta library.
pub type Result<T> = std::result::Result<T, ActaError>;
