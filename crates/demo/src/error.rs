//! Demo error model.

use thiserror::Error;

/// Result type used by the demo crate.
pub type DemoResult<T> = Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    /// An age variable could not be parsed as a signed integer.
    #[error("invalid age in {var}: {value:?}")]
    InvalidAge {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Writing the report failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
