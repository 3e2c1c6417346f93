use crate::error::Result;
use crate::store::VectorStore;
use crate::types::SearchHit;
use grounded_chunker::ChunkMetadata;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cloneable handle serializing access to one store instance.
///
/// Concurrency discipline: every `add` takes the writer lock, so appends to
/// the index and the metadata list are atomic relative to readers. A
/// `search` takes a read lock — concurrent searches proceed together, and a
/// search racing an in-flight `add` blocks behind the writer and observes
/// the fully-applied state, never a half-updated one.
#[derive(Clone)]
pub struct SharedVectorStore {
    inner: Arc<RwLock<VectorStore>>,
}

impl SharedVectorStore {
    #[must_use]
    pub fn new(store: VectorStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn add(&self, vectors: Vec<Vec<f32>>, metadatas: Vec<ChunkMetadata>) -> Result<()> {
        self.inner.write().await.add(vectors, metadatas).await
    }

    pub async fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>> {
        self.inner.read().await.search(query, k)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn dim(&self) -> usize {
        self.inner.read().await.dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use tempfile::TempDir;

    fn meta(chunk_id: usize) -> ChunkMetadata {
        ChunkMetadata {
            filename: "doc.txt".to_string(),
            chunk_id,
            text: format!("chunk {chunk_id}"),
        }
    }

    #[tokio::test]
    async fn concurrent_adds_preserve_the_positional_invariant() {
        let tmp = TempDir::new().unwrap();
        let store = VectorStore::open(StoreConfig::new(2, tmp.path()))
            .await
            .unwrap();
        let shared = SharedVectorStore::new(store);

        let mut tasks = Vec::new();
        for i in 0..8 {
            let shared = shared.clone();
            tasks.push(tokio::spawn(async move {
                shared
                    .add(vec![vec![i as f32, 1.0]], vec![meta(i)])
                    .await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(shared.len().await, 8);
        let hits = shared.search(&[0.0, 1.0], 100).await.unwrap();
        assert_eq!(hits.len(), 8);
    }
}
