//! Typed errors for the masking library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on analyzer failures separately from misuse of the restore path.

use thiserror::Error;

/// Errors raised by a linguistic analyzer or by validation of its output.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The analysis backend itself failed
    #[error("analysis backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Token texts do not concatenate back to the analyzed input
    #[error("analyzer tokens cover {covered:?}, expected {input:?}")]
    Malformed { input: String, covered: String },
}

impl AnalyzerError {
    /// Wrap any backend error.
    pub fn backend(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(err.into())
    }
}

/// Errors that can occur while masking or restoring text.
#[derive(Debug, Error)]
pub enum MaskingError {
    /// Linguistic analysis failed; no partial masking is produced
    #[error("analysis failed: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// Emitted tokens do not line up with the replacement map
    #[error("emitted token count {actual} does not match the {expected} tokens the replacement map was built from")]
    IndexMismatch { expected: usize, actual: usize },

    /// A refine pass restored to something other than the previous pass's output
    #[error("refine pass {pass} does not restore to the output of the pass before it")]
    PassMismatch { pass: usize },

    /// An environment setting could not be parsed
    #[error("invalid value for {key}: {value:?}")]
    Config { key: String, value: String },
}

/// Result type alias for masking operations.
pub type Result<T> = std::result::Result<T, MaskingError>;

/// Result type alias for analyzer calls.
pub type AnalyzerResult<T> = std::result::Result<T, AnalyzerError>;
