use crate::embedder::{normalize, Embedder};
use crate::error::{EmbedderError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable the embedding credential is read from.
pub const EMBED_KEY_VAR: &str = "OPENAI_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct HttpEmbedderConfig {
    /// Base URL of an OpenAI-compatible API, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    /// Expected vector width; also requested from models that support
    /// shortened output
    pub dimension: usize,
}

/// Client for an OpenAI-compatible `POST {base}/embeddings` endpoint.
///
/// Responses are re-ordered by the service-reported index and L2-normalized
/// before they leave this boundary, so downstream inner products behave as
/// cosine similarity. The store performs no normalization of its own.
pub struct HttpEmbedder {
    client: reqwest::Client,
    config: HttpEmbedderConfig,
}

impl HttpEmbedder {
    pub fn new(config: HttpEmbedderConfig) -> Result<Self> {
        if config.api_key.as_deref().unwrap_or("").is_empty() {
            return Err(EmbedderError::MissingCredential { var: EMBED_KEY_VAR });
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| EmbedderError::InvalidResponse(format!("client setup: {e}")))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/embeddings", self.config.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<usize>,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Deserialize)]
struct EmbeddingRow {
    index: usize,
    embedding: Vec<f32>,
}

#[async_trait]
impl Embedder for HttpEmbedder {
    fn dimension(&self) -> usize {
        self.config.dimension
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.endpoint();
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(EmbedderError::MissingCredential { var: EMBED_KEY_VAR })?;

        log::debug!("Embedding {} texts via {url}", texts.len());
        let response = self
            .client
            .post(&url)
            .bearer_auth(key)
            .json(&EmbeddingsRequest {
                model: &self.config.model,
                input: texts,
                dimensions: Some(self.config.dimension),
            })
            .send()
            .await
            .map_err(|source| EmbedderError::Unreachable {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbedderError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| EmbedderError::InvalidResponse(format!("decode: {e}")))?;

        if parsed.data.len() != texts.len() {
            return Err(EmbedderError::InvalidResponse(format!(
                "requested {} embeddings, got {}",
                texts.len(),
                parsed.data.len()
            )));
        }

        // The wire order is not guaranteed; the reported index is.
        let mut rows = parsed.data;
        rows.sort_by_key(|row| row.index);
        Ok(rows
            .into_iter()
            .map(|row| {
                let mut vector = row.embedding;
                normalize(&mut vector);
                vector
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> HttpEmbedderConfig {
        HttpEmbedderConfig {
            base_url: "https://api.openai.com/v1/".to_string(),
            api_key: api_key.map(ToString::to_string),
            model: "text-embedding-3-small".to_string(),
            dimension: 384,
        }
    }

    #[test]
    fn missing_credential_is_a_typed_error() {
        let result = HttpEmbedder::new(config(None));
        assert!(matches!(
            result,
            Err(EmbedderError::MissingCredential { var: EMBED_KEY_VAR })
        ));

        let result = HttpEmbedder::new(config(Some("")));
        assert!(matches!(
            result,
            Err(EmbedderError::MissingCredential { .. })
        ));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let embedder = HttpEmbedder::new(config(Some("sk-test"))).unwrap();
        assert_eq!(embedder.endpoint(), "https://api.openai.com/v1/embeddings");
        assert_eq!(embedder.dimension(), 384);
    }

    #[test]
    fn request_body_carries_model_input_and_dimensions() {
        let texts = vec!["a".to_string(), "b".to_string()];
        let body = serde_json::to_value(EmbeddingsRequest {
            model: "text-embedding-3-small",
            input: &texts,
            dimensions: Some(384),
        })
        .unwrap();
        assert_eq!(body["model"], "text-embedding-3-small");
        assert_eq!(body["input"].as_array().unwrap().len(), 2);
        assert_eq!(body["dimensions"], 384);
    }

    #[test]
    fn response_rows_reorder_by_index() {
        let raw = r#"{"data":[
            {"index":1,"embedding":[0.0,1.0]},
            {"index":0,"embedding":[1.0,0.0]}
        ]}"#;
        let mut parsed: EmbeddingsResponse = serde_json::from_str(raw).unwrap();
        parsed.data.sort_by_key(|row| row.index);
        assert_eq!(parsed.data[0].embedding, vec![1.0, 0.0]);
        assert_eq!(parsed.data[1].embedding, vec![0.0, 1.0]);
    }
}
