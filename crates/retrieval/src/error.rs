use thiserror::Error;

pub type Result<T> = std::result::Result<T, RetrievalError>;

#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Embedder error: {0}")]
    Embedder(#[from] grounded_embedder::EmbedderError),

    #[error("Vector store error: {0}")]
    Store(#[from] grounded_vector_store::StoreError),

    #[error("Provider error: {0}")]
    Provider(#[from] grounded_providers::ProviderError),
}
