use crate::error::{EmbedderError, Result};
use async_trait::async_trait;

/// Boundary to the external embedding model.
///
/// Implementations return one vector per input text, in input order, each of
/// width `dimension()`. The pipeline trusts that width; the vector store
/// re-checks it against its own configured dimension on add.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Width of every vector this embedder produces.
    fn dimension(&self) -> usize;

    /// Embed a batch of texts, preserving input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embed a single text (a one-element batch).
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text.to_string()]).await?;
        vectors
            .pop()
            .ok_or_else(|| EmbedderError::InvalidResponse("empty embedding result".to_string()))
    }
}

/// Which embedder backend to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedderMode {
    /// OpenAI-compatible embeddings endpoint
    Http,
    /// Deterministic hash vectors, no network
    Hash,
}

impl EmbedderMode {
    pub fn from_key(key: &str) -> Result<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "hash" => Ok(Self::Hash),
            other => Err(EmbedderError::UnknownMode(other.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Hash => "hash",
        }
    }
}

/// Scale `vec` to unit L2 norm in place; zero vectors are left alone.
pub(crate) fn normalize(vec: &mut [f32]) {
    let norm = vec.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 {
        return;
    }
    for value in vec {
        *value /= norm;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_keys_round_trip() {
        assert_eq!(EmbedderMode::from_key("http").unwrap(), EmbedderMode::Http);
        assert_eq!(EmbedderMode::from_key(" HASH ").unwrap(), EmbedderMode::Hash);
        assert!(matches!(
            EmbedderMode::from_key("onnx"),
            Err(EmbedderError::UnknownMode(_))
        ));
    }

    #[test]
    fn normalize_produces_unit_vectors() {
        let mut v = vec![3.0, 4.0];
        normalize(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[1] - 0.8).abs() < 1e-6);

        let mut zero = vec![0.0, 0.0];
        normalize(&mut zero);
        assert_eq!(zero, vec![0.0, 0.0]);
    }
}
