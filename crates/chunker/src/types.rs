use serde::{Deserialize, Serialize};

/// Persisted identity of one chunk: which document it came from, its 0-based
/// position within that document, and the chunk text itself.
///
/// Inside the vector store the metadata's position in the stored sequence is
/// also the row index of its embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub filename: String,
    pub chunk_id: usize,
    pub text: String,
}

/// Attach `filename` and sequential 0-based `chunk_id`s to chunk texts,
/// preserving chunk order.
#[must_use]
pub fn prepare_metadatas(chunks: &[String], filename: &str) -> Vec<ChunkMetadata> {
    chunks
        .iter()
        .enumerate()
        .map(|(chunk_id, text)| ChunkMetadata {
            filename: filename.to_string(),
            chunk_id,
            text: text.clone(),
        })
        .collect()
}
