//! # Grounded Embedder
//!
//! Boundary to the external embedding model: a batch-first [`Embedder`]
//! trait plus two backends.
//!
//! - [`HttpEmbedder`] — OpenAI-compatible `/embeddings` client for real
//!   deployments.
//! - [`HashEmbedder`] — deterministic unit vectors derived from a text hash,
//!   for tests and offline smoke runs.
//!
//! Both preserve input order, one vector per text, and emit unit-norm
//! vectors so the store's inner-product scores read as cosine similarity.

mod embedder;
mod error;
mod hash;
mod http;

pub use embedder::{Embedder, EmbedderMode};
pub use error::{EmbedderError, Result};
pub use hash::HashEmbedder;
pub use http::{HttpEmbedder, HttpEmbedderConfig, EMBED_KEY_VAR};
