//! # Grounded Ingest
//!
//! Document ingestion: the orchestrator that turns an uploaded file into
//! searchable rows of the vector store.
//!
//! ```text
//! file
//!     │
//!     ├──> TextExtractor        format dispatch, whitespace-normalized text
//!     │
//!     ├──> chunk                overlapping word windows
//!     │
//!     ├──> prepare_metadatas    filename + 0-based chunk_id per chunk
//!     │
//!     ├──> Embedder             one batched call per document
//!     │
//!     └──> SharedVectorStore    add + persist, then return
//! ```
//!
//! Extraction and chunking failures happen before any store mutation, so a
//! failed ingestion never leaves partial state behind.

mod error;
mod extract;
mod ingestor;

pub use error::{IngestError, Result};
pub use extract::{PlainTextExtractor, TextExtractor};
pub use ingestor::{IngestReport, Ingestor};
