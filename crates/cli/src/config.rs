use anyhow::{bail, Context, Result};
use grounded_embedder::{
    Embedder, EmbedderMode, HashEmbedder, HttpEmbedder, HttpEmbedderConfig, EMBED_KEY_VAR,
};
use std::path::PathBuf;
use std::sync::Arc;

pub(crate) const DEFAULT_EMBED_DIM: usize = 384;
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_EMBED_URL: &str = "https://api.openai.com/v1";
const DEFAULT_EMBED_MODEL: &str = "text-embedding-3-small";

/// Resolved runtime configuration: CLI flags win over `GROUNDED_*`
/// environment variables, which carry the defaults.
pub(crate) struct AppConfig {
    pub data_dir: PathBuf,
    pub embed_dim: usize,
    pub embed_mode: EmbedderMode,
    pub embed_url: String,
    pub embed_model: String,
    pub provider_key: Option<String>,
}

impl AppConfig {
    pub(crate) fn resolve(
        data_dir: Option<PathBuf>,
        embed_dim: Option<usize>,
        embed_mode: Option<EmbedderMode>,
    ) -> Result<Self> {
        let data_dir = data_dir
            .or_else(|| std::env::var("GROUNDED_DATA_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let embed_dim = match embed_dim {
            Some(dim) => dim,
            None => match std::env::var("GROUNDED_EMBED_DIM") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .with_context(|| format!("Invalid GROUNDED_EMBED_DIM '{raw}'"))?,
                Err(_) => DEFAULT_EMBED_DIM,
            },
        };
        if embed_dim == 0 {
            bail!("Embedding dimension must be positive");
        }

        let embed_mode = match embed_mode {
            Some(mode) => mode,
            None => match std::env::var("GROUNDED_EMBED_MODE") {
                Ok(raw) => EmbedderMode::from_key(&raw)?,
                Err(_) => EmbedderMode::Http,
            },
        };

        let embed_url = std::env::var("GROUNDED_EMBED_URL")
            .unwrap_or_else(|_| DEFAULT_EMBED_URL.to_string());
        let embed_model = std::env::var("GROUNDED_EMBED_MODEL")
            .unwrap_or_else(|_| DEFAULT_EMBED_MODEL.to_string());
        let provider_key = std::env::var("GROUNDED_PROVIDER").ok();

        Ok(Self {
            data_dir,
            embed_dim,
            embed_mode,
            embed_url,
            embed_model,
            provider_key,
        })
    }

    pub(crate) fn build_embedder(&self) -> Result<Arc<dyn Embedder>> {
        match self.embed_mode {
            EmbedderMode::Hash => Ok(Arc::new(HashEmbedder::new(self.embed_dim))),
            EmbedderMode::Http => {
                let embedder = HttpEmbedder::new(HttpEmbedderConfig {
                    base_url: self.embed_url.clone(),
                    api_key: std::env::var(EMBED_KEY_VAR).ok(),
                    model: self.embed_model.clone(),
                    dimension: self.embed_dim,
                })?;
                Ok(Arc::new(embedder))
            }
        }
    }
}
