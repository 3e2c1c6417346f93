use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};

/// Chunk window configuration, in whitespace-delimited words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Window size: maximum words per chunk
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    /// Words shared between consecutive chunks; must stay below `max_tokens`
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

const fn default_max_tokens() -> usize {
    400
}

const fn default_overlap() -> usize {
    60
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            overlap: default_overlap(),
        }
    }
}

impl ChunkingConfig {
    pub fn new(max_tokens: usize, overlap: usize) -> Result<Self> {
        let config = Self {
            max_tokens,
            overlap,
        };
        config.validate()?;
        Ok(config)
    }

    /// The window must advance by a strictly positive amount per iteration,
    /// which also guarantees termination.
    pub fn validate(&self) -> Result<()> {
        if self.max_tokens == 0 || self.overlap >= self.max_tokens {
            return Err(ChunkerError::InvalidWindow {
                max_tokens: self.max_tokens,
                overlap: self.overlap,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ChunkingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_tokens, 400);
        assert_eq!(config.overlap, 60);
    }

    #[test]
    fn rejects_overlap_not_below_window() {
        assert!(ChunkingConfig::new(100, 100).is_err());
        assert!(ChunkingConfig::new(100, 150).is_err());
        assert!(ChunkingConfig::new(0, 0).is_err());
        assert!(ChunkingConfig::new(100, 99).is_ok());
        assert!(ChunkingConfig::new(1, 0).is_ok());
    }
}
