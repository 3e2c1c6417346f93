use crate::embedder::{normalize, Embedder};
use crate::error::Result;
use async_trait::async_trait;

/// Deterministic embedder for tests and offline smoke runs.
///
/// Seeds a splitmix64 stream from an FNV-1a hash of the text and emits a
/// unit vector at the configured dimension. The same text always maps to the
/// same vector, and distinct texts are very unlikely to collide, which is
/// all retrieval plumbing needs to be exercised end to end.
#[derive(Debug, Clone, Copy)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    #[must_use]
    pub const fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let mut state = fnv1a_64(text.as_bytes())
            ^ (self.dimension as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let mut vec = Vec::with_capacity(self.dimension);
        for _ in 0..self.dimension {
            let bits = splitmix64(&mut state);
            // Top 24 bits → uniform float in [-1, 1).
            let unit = (bits >> 40) as f32 / (1u32 << 23) as f32 - 1.0;
            vec.push(unit);
        }
        normalize(&mut vec);
        vec
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|text| self.vector_for(text)).collect())
    }
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

const fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn same_text_same_vector() {
        let embedder = HashEmbedder::new(16);
        let a = embedder.embed("hello world").await.unwrap();
        let b = embedder.embed("hello world").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[tokio::test]
    async fn different_texts_differ() {
        let embedder = HashEmbedder::new(16);
        let a = embedder.embed("alpha").await.unwrap();
        let b = embedder.embed("beta").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn vectors_are_unit_norm() {
        let embedder = HashEmbedder::new(64);
        for text in ["", "x", "a longer piece of text with many words"] {
            let v = embedder.embed(text).await.unwrap();
            let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-5, "norm {norm} for {text:?}");
        }
    }

    #[tokio::test]
    async fn batch_preserves_input_order() {
        let embedder = HashEmbedder::new(8);
        let texts: Vec<String> = ["one", "two", "three"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let batch = embedder.embed_batch(&texts).await.unwrap();
        assert_eq!(batch.len(), 3);
        for (text, vector) in texts.iter().zip(&batch) {
            assert_eq!(vector, &embedder.embed(text).await.unwrap());
        }
    }
}
