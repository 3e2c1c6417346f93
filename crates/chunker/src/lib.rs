//! # Grounded Chunker
//!
//! Splits extracted document text into overlapping word windows — the unit
//! of retrieval for the vector store.
//!
//! ## Pipeline position
//!
//! ```text
//! Extracted text
//!     │
//!     ├──> normalize_whitespace
//!     │
//!     ├──> chunk (word windows of max_tokens, stepping max_tokens - overlap)
//!     │
//!     └──> prepare_metadatas
//!            └─> ChunkMetadata { filename, chunk_id, text }
//! ```
//!
//! Consecutive chunks share exactly `overlap` words; the final chunk may be
//! shorter than the window but always ends on the last word of the document.

mod chunker;
mod config;
mod error;
mod types;

pub use chunker::{chunk, normalize_whitespace};
pub use config::ChunkingConfig;
pub use error::{ChunkerError, Result};
pub use types::{prepare_metadatas, ChunkMetadata};
