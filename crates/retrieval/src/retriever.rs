use crate::error::Result;
use crate::prompt::assemble_prompt;
use grounded_embedder::Embedder;
use grounded_providers::Provider;
use grounded_vector_store::{SearchHit, SharedVectorStore};
use serde::Serialize;
use std::sync::Arc;

/// How many chunks ground an answer unless the caller asks otherwise.
pub const DEFAULT_TOP_K: usize = 5;

/// Which source chunk supported a hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Citation {
    pub filename: String,
    pub chunk_id: usize,
    pub score: f32,
}

impl From<&SearchHit> for Citation {
    fn from(hit: &SearchHit) -> Self {
        Self {
            filename: hit.filename.clone(),
            chunk_id: hit.chunk_id,
            score: hit.score,
        }
    }
}

/// A provider answer plus the citations of every chunk that grounded it.
/// The citations come from the retrieved hits, whichever backend produced
/// the answer text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroundedAnswer {
    pub answer: String,
    pub citations: Vec<Citation>,
}

/// Query-side orchestration: embed the query, search the store, assemble
/// the grounding prompt, call the language model.
pub struct Retriever {
    store: SharedVectorStore,
    embedder: Arc<dyn Embedder>,
}

impl Retriever {
    #[must_use]
    pub fn new(store: SharedVectorStore, embedder: Arc<dyn Embedder>) -> Self {
        Self { store, embedder }
    }

    /// Top-k most similar chunks for `query`, best first.
    pub async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<SearchHit>> {
        let query_vector = self.embedder.embed(query).await?;
        let hits = self.store.search(&query_vector, k).await?;
        log::debug!("Retrieved {} hits for query", hits.len());
        Ok(hits)
    }

    /// Retrieve, assemble the grounding prompt, and generate an answer via
    /// `provider`. Provider failures propagate typed; nothing is swallowed.
    pub async fn answer(
        &self,
        query: &str,
        k: usize,
        provider: &Provider,
    ) -> Result<GroundedAnswer> {
        let hits = self.retrieve(query, k).await?;
        let prompt = assemble_prompt(query, &hits);
        let answer = provider.generate(&prompt).await?;

        Ok(GroundedAnswer {
            answer,
            citations: hits.iter().map(Citation::from).collect(),
        })
    }
}
