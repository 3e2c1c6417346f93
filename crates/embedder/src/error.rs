use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmbedderError>;

/// Embedder failures, one variant per cause so the ingestion and retrieval
/// boundaries can report actionable conditions.
#[derive(Error, Debug)]
pub enum EmbedderError {
    #[error("Embedding credential missing: set {var}")]
    MissingCredential { var: &'static str },

    #[error("Embedding service unreachable at {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Embedding service returned HTTP {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("Invalid embedding response: {0}")]
    InvalidResponse(String),

    #[error("Unsupported embedder mode '{0}' (expected 'http' or 'hash')")]
    UnknownMode(String),
}
