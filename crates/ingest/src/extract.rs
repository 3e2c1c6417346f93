use crate::error::{IngestError, Result};
use grounded_chunker::normalize_whitespace;
use std::path::Path;

/// Boundary to document text extraction.
///
/// The pipeline only needs whitespace-normalized plain text; how it is
/// pulled out of a given format lives behind this trait. Implementations
/// for paginated or word-processor formats plug in here without the
/// orchestrator changing.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Extractor for formats that already are plain text (`.txt`, `.md`).
///
/// Any other extension is a typed `UnsupportedFormat` failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "txt" | "md" => {
                let raw = std::fs::read_to_string(path)?;
                Ok(normalize_whitespace(&raw))
            }
            _ => Err(IngestError::UnsupportedFormat { extension }),
        }
    }
}
