//! # Grounded Vector Store
//!
//! Durable exact nearest-neighbor storage for chunk embeddings.
//!
//! ## Architecture
//!
//! ```text
//! (vectors, metadatas)
//!     │
//!     ├──> FlatIndex            row-major f32 matrix, inner-product scoring
//!     │
//!     ├──> metadata list        ChunkMetadata, position == index row
//!     │
//!     └──> persistence          index.bin (bincode) + meta.json, rewritten
//!                               wholesale on every add, tmp-then-rename
//! ```
//!
//! The two sequences move in lock-step; their positional correspondence is
//! the store's core invariant and any divergence found at load time is
//! fatal. Every add rewrites both artifacts in full — fine at this corpus
//! size, so batch additions per document rather than per chunk.

mod config;
mod error;
mod flat_index;
mod shared;
mod store;
mod types;

pub use config::{StoreConfig, INDEX_FILE_NAME, META_FILE_NAME};
pub use error::{Result, StoreError};
pub use flat_index::FlatIndex;
pub use shared::SharedVectorStore;
pub use store::{VectorStore, INDEX_SCHEMA_VERSION, META_SCHEMA_VERSION};
pub use types::SearchHit;

// Re-export the chunk metadata type for convenience
pub use grounded_chunker::ChunkMetadata;
