use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A vector (or a persisted index) whose width differs from the
    /// dimension this store was configured with. Carries the configured
    /// value so operators can reconcile embedder choice and store config.
    #[error("Invalid vector dimension: store is configured for {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Mismatched batch halves passed to `add`.
    #[error("Vector batch has {vectors} rows but {metadatas} metadata entries")]
    LengthMismatch { vectors: usize, metadatas: usize },

    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Metadata document error: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("Index artifact error: {0}")]
    Index(#[from] bincode::Error),

    #[error("Unsupported {artifact} schema_version {found} (expected {expected})")]
    UnsupportedSchema {
        artifact: &'static str,
        found: u32,
        expected: u32,
    },

    /// The persisted index and metadata no longer correspond positionally.
    #[error("Store is corrupt: {0}")]
    Corrupt(String),
}
