use crate::error::{IngestError, Result};
use crate::extract::{PlainTextExtractor, TextExtractor};
use grounded_chunker::{chunk, normalize_whitespace, prepare_metadatas, ChunkingConfig};
use grounded_embedder::Embedder;
use grounded_vector_store::SharedVectorStore;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Outcome of one document ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub filename: String,
    pub chunks: usize,
}

/// Sequences one document through the pipeline:
/// extract → chunk → metadata → embed → store.add.
///
/// Chunk order is preserved end to end — the chunk at position i is embedded
/// as vector i and stored as row i — so `chunk_id`s always line up with
/// their embeddings. Embedding runs as one batch per document, and the store
/// persists before `ingest` returns.
pub struct Ingestor {
    store: SharedVectorStore,
    embedder: Arc<dyn Embedder>,
    extractor: Box<dyn TextExtractor>,
    chunking: ChunkingConfig,
}

impl Ingestor {
    #[must_use]
    pub fn new(
        store: SharedVectorStore,
        embedder: Arc<dyn Embedder>,
        chunking: ChunkingConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            extractor: Box::new(PlainTextExtractor),
            chunking,
        }
    }

    /// Swap in an extractor that understands more formats.
    #[must_use]
    pub fn with_extractor(mut self, extractor: Box<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Ingest a document from disk. The stored filename is the path's final
    /// component.
    pub async fn ingest_file(&self, path: impl AsRef<Path>) -> Result<IngestReport> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown")
            .to_string();

        let text = self.extractor.extract(path)?;
        self.ingest_text(&filename, &text).await
    }

    /// Ingest already-extracted text under the given filename.
    pub async fn ingest_text(&self, filename: &str, text: &str) -> Result<IngestReport> {
        let text = normalize_whitespace(text);
        let chunks = chunk(&text, self.chunking)?;
        if chunks.is_empty() {
            return Err(IngestError::EmptyDocument {
                filename: filename.to_string(),
            });
        }

        let metadatas = prepare_metadatas(&chunks, filename);
        let vectors = self.embedder.embed_batch(&chunks).await?;
        self.store.add(vectors, metadatas).await?;

        log::info!("Ingested '{filename}' as {} chunks", chunks.len());
        Ok(IngestReport {
            filename: filename.to_string(),
            chunks: chunks.len(),
        })
    }
}
