use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Language-model call failures, one variant per cause so operators can
/// tell an unreachable service from a bad response from a misconfiguration
/// without reading logs.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Unknown provider key '{key}' (known: {known})")]
    UnknownProvider { key: String, known: &'static str },

    #[error("{provider} credential missing: set {var}")]
    MissingCredential {
        provider: &'static str,
        var: &'static str,
    },

    #[error("{provider} unreachable at {url}: {source}")]
    Unreachable {
        provider: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned HTTP {status}: {body}")]
    BadStatus {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Invalid completion response: {0}")]
    InvalidResponse(String),
}
