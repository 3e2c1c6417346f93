use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Error, Debug)]
pub enum IngestError {
    /// Extractor given a file type outside the supported set. Raised before
    /// any store mutation, so a failed ingestion never corrupts the store.
    #[error("Unsupported file format '{extension}' (supported: txt, md)")]
    UnsupportedFormat { extension: String },

    #[error("Document '{filename}' contains no words after normalization")]
    EmptyDocument { filename: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chunker error: {0}")]
    Chunker(#[from] grounded_chunker::ChunkerError),

    #[error("Embedder error: {0}")]
    Embedder(#[from] grounded_embedder::EmbedderError),

    #[error("Vector store error: {0}")]
    Store(#[from] grounded_vector_store::StoreError),
}
