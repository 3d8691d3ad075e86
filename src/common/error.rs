//! Error types for pagesim.
//!
//! Every variant belongs to the input and output boundary. The replacement
//! engine itself assumes validated input and never returns an error.

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A reference-string token is not a non-negative integer.
    #[error("invalid page reference {token:?}: expected a non-negative integer")]
    InvalidReference { token: String },

    /// The frame count is missing, non-numeric, or not at least 1.
    #[error("invalid frame count {0:?}: expected a positive integer")]
    InvalidFrameCount(String),

    /// The policy selector names no known algorithm.
    #[error("unknown policy {0:?}: expected FIFO, LRU, OPTIMAL, CLOCK or ALL")]
    UnknownPolicy(String),

    /// I/O error while reading operator input or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed request JSON or a response that failed to encode.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed command-line arguments.
    #[error("argument error: {0}")]
    Args(#[from] pico_args::Error),
}
