use serde::{Deserialize, Serialize};

/// One retrieved chunk: the stored metadata copied out and annotated with
/// the similarity score for this query. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub filename: String,
    pub chunk_id: usize,
    pub text: String,
    pub score: f32,
}
