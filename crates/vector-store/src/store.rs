use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::flat_index::FlatIndex;
use crate::types::SearchHit;
use grounded_chunker::ChunkMetadata;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const INDEX_SCHEMA_VERSION: u32 = 1;
pub const META_SCHEMA_VERSION: u32 = 1;

/// Durable exact-nearest-neighbor store over chunk embeddings.
///
/// The similarity index and the metadata list are parallel sequences: row i
/// of the index is the embedding of `meta[i]`. `add` is the sole mutator and
/// rewrites both artifacts in full before returning, so the on-disk pair is
/// the single source of truth across restarts.
pub struct VectorStore {
    dim: usize,
    index: FlatIndex,
    meta: Vec<ChunkMetadata>,
    index_path: PathBuf,
    meta_path: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct PersistedIndex {
    schema_version: u32,
    dim: usize,
    data: Vec<f32>,
}

#[derive(Serialize, Deserialize)]
struct PersistedMeta {
    schema_version: u32,
    chunks: Vec<ChunkMetadata>,
}

impl VectorStore {
    /// Open a store at `config.data_dir`.
    ///
    /// When both artifacts exist the persisted state is loaded; a persisted
    /// index whose width differs from `config.dim` fails with
    /// `DimensionMismatch`. Otherwise the store starts empty at `config.dim`.
    pub async fn open(config: StoreConfig) -> Result<Self> {
        let index_path = config.index_path();
        let meta_path = config.meta_path();

        if index_path.exists() && meta_path.exists() {
            let index = load_index(&index_path, config.dim).await?;
            let meta = load_meta(&meta_path).await?;
            if index.len() != meta.len() {
                return Err(StoreError::Corrupt(format!(
                    "index has {} vectors but metadata has {} entries",
                    index.len(),
                    meta.len()
                )));
            }
            log::info!(
                "Loaded vector store from {} ({} chunks, dim {})",
                config.data_dir.display(),
                meta.len(),
                config.dim
            );
            return Ok(Self {
                dim: config.dim,
                index,
                meta,
                index_path,
                meta_path,
            });
        }

        log::info!(
            "Starting empty vector store at {} (dim {})",
            config.data_dir.display(),
            config.dim
        );
        Ok(Self {
            dim: config.dim,
            index: FlatIndex::new(config.dim),
            meta: Vec::new(),
            index_path,
            meta_path,
        })
    }

    /// Append `vectors` and their `metadatas` in matching order, then persist
    /// both artifacts before returning.
    ///
    /// Preconditions are checked over the whole batch before any mutation:
    /// a dimension or length mismatch leaves memory and disk untouched. A
    /// persistence failure rolls the in-memory appends back so the store
    /// keeps matching its on-disk state.
    pub async fn add(
        &mut self,
        vectors: Vec<Vec<f32>>,
        metadatas: Vec<ChunkMetadata>,
    ) -> Result<()> {
        if vectors.len() != metadatas.len() {
            return Err(StoreError::LengthMismatch {
                vectors: vectors.len(),
                metadatas: metadatas.len(),
            });
        }
        if vectors.is_empty() {
            return Ok(());
        }
        for vector in &vectors {
            if vector.len() != self.dim {
                return Err(StoreError::DimensionMismatch {
                    expected: self.dim,
                    actual: vector.len(),
                });
            }
        }

        let prior_len = self.meta.len();
        self.index.add_batch(&vectors)?;
        self.meta.extend(metadatas);

        if let Err(err) = self.persist().await {
            self.index.truncate(prior_len);
            self.meta.truncate(prior_len);
            return Err(err);
        }

        debug_assert_eq!(self.index.len(), self.meta.len());
        log::info!(
            "Added {} vectors, store now holds {}",
            vectors.len(),
            self.meta.len()
        );
        Ok(())
    }

    /// Return up to `k` hits ordered by descending inner-product score.
    ///
    /// The store performs no normalization; with unit vectors from the
    /// embedder the score is cosine similarity. Fewer than `k` stored
    /// vectors means fewer hits, never placeholders.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>> {
        let ranked = self.index.search(query, k)?;

        let hits: Vec<SearchHit> = ranked
            .into_iter()
            .filter_map(|(row, score)| {
                // A row without metadata is the "no match" sentinel case;
                // it never becomes a hit.
                self.meta.get(row).map(|meta| SearchHit {
                    filename: meta.filename.clone(),
                    chunk_id: meta.chunk_id,
                    text: meta.text.clone(),
                    score,
                })
            })
            .collect();

        log::debug!("Search returned {} of up to {k} hits", hits.len());
        Ok(hits)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.meta.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
    }

    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Rewrite both artifacts wholesale. Each lands via tmp-then-rename so a
    /// crash never leaves a half-written file; a crash between the two
    /// renames is caught at the next `open` as a length mismatch.
    async fn persist(&self) -> Result<()> {
        if let Some(parent) = self.index_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let index_bytes = bincode::serialize(&PersistedIndex {
            schema_version: INDEX_SCHEMA_VERSION,
            dim: self.dim,
            data: self.index.to_flat(),
        })?;
        let meta_bytes = serde_json::to_vec_pretty(&PersistedMeta {
            schema_version: META_SCHEMA_VERSION,
            chunks: self.meta.clone(),
        })?;

        let index_tmp = self.index_path.with_extension("bin.tmp");
        let meta_tmp = self.meta_path.with_extension("json.tmp");
        tokio::fs::write(&index_tmp, index_bytes).await?;
        tokio::fs::write(&meta_tmp, meta_bytes).await?;
        tokio::fs::rename(&index_tmp, &self.index_path).await?;
        tokio::fs::rename(&meta_tmp, &self.meta_path).await?;
        Ok(())
    }
}

async fn load_index(path: &Path, expected_dim: usize) -> Result<FlatIndex> {
    let bytes = tokio::fs::read(path).await?;
    let persisted: PersistedIndex = bincode::deserialize(&bytes)?;
    if persisted.schema_version != INDEX_SCHEMA_VERSION {
        return Err(StoreError::UnsupportedSchema {
            artifact: "index",
            found: persisted.schema_version,
            expected: INDEX_SCHEMA_VERSION,
        });
    }
    if persisted.dim != expected_dim {
        return Err(StoreError::DimensionMismatch {
            expected: expected_dim,
            actual: persisted.dim,
        });
    }
    FlatIndex::from_flat(persisted.dim, persisted.data)
}

async fn load_meta(path: &Path) -> Result<Vec<ChunkMetadata>> {
    let bytes = tokio::fs::read(path).await?;
    let persisted: PersistedMeta = serde_json::from_slice(&bytes)?;
    if persisted.schema_version != META_SCHEMA_VERSION {
        return Err(StoreError::UnsupportedSchema {
            artifact: "metadata",
            found: persisted.schema_version,
            expected: META_SCHEMA_VERSION,
        });
    }
    Ok(persisted.chunks)
}
