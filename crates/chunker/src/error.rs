use thiserror::Error;

/// Result type for chunker operations
pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors that can occur while chunking text
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// Window parameters that cannot make progress
    #[error("Invalid chunk window: max_tokens={max_tokens}, overlap={overlap} (need 0 < overlap advance, overlap < max_tokens)")]
    InvalidWindow { max_tokens: usize, overlap: usize },
}
