use crate::error::{ProviderError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const KNOWN_KEYS: &str = "groq, llama, openai, gpt-4";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Answers must come from the supplied context only; the assembled prompt
/// repeats this per request.
const SYSTEM_MESSAGE: &str =
    "You are a document assistant. Answer ONLY from the provided context.";

/// The closed set of language-model backends.
///
/// Selection by string key resolves here or fails; there is no silent
/// fallback for an unknown key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Groq,
    OpenAi,
}

impl ProviderKind {
    /// Resolve a request key to a provider. Unknown keys are a fatal,
    /// typed condition listing the accepted keys.
    pub fn from_key(key: &str) -> Result<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "groq" | "llama" | "llama-3.1-8b-instant" => Ok(Self::Groq),
            "openai" | "gpt-4" | "gpt-4o" | "gpt-4o-mini" => Ok(Self::OpenAi),
            _ => Err(ProviderError::UnknownProvider {
                key: key.to_string(),
                known: KNOWN_KEYS,
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenAi => "openai",
        }
    }

    /// Environment variable holding this provider's credential.
    #[must_use]
    pub const fn key_var(self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }

    const fn base_url(self) -> &'static str {
        match self {
            Self::Groq => "https://api.groq.com/openai/v1",
            Self::OpenAi => "https://api.openai.com/v1",
        }
    }

    const fn default_model(self) -> &'static str {
        match self {
            Self::Groq => "llama-3.1-8b-instant",
            Self::OpenAi => "gpt-4o-mini",
        }
    }
}

/// A language-model caller with a single capability: turn a grounding
/// prompt into an answer string.
///
/// Both variants speak the OpenAI chat-completions wire shape; they differ
/// in endpoint, credential, and model.
#[derive(Debug)]
pub enum Provider {
    Groq(ChatCompletionsClient),
    OpenAi(ChatCompletionsClient),
}

impl Provider {
    /// Build a provider for `kind` with the given credential. A missing or
    /// empty credential fails here, before any request is made.
    pub fn new(kind: ProviderKind, api_key: Option<String>) -> Result<Self> {
        let api_key = match api_key {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(ProviderError::MissingCredential {
                    provider: kind.as_str(),
                    var: kind.key_var(),
                })
            }
        };

        let client = ChatCompletionsClient::new(kind, api_key, kind.default_model().to_string())?;
        Ok(match kind {
            ProviderKind::Groq => Self::Groq(client),
            ProviderKind::OpenAi => Self::OpenAi(client),
        })
    }

    /// Build a provider for `kind`, reading the credential from the
    /// provider's environment variable.
    pub fn from_env(kind: ProviderKind) -> Result<Self> {
        Self::new(kind, std::env::var(kind.key_var()).ok())
    }

    #[must_use]
    pub const fn kind(&self) -> ProviderKind {
        match self {
            Self::Groq(_) => ProviderKind::Groq,
            Self::OpenAi(_) => ProviderKind::OpenAi,
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<String> {
        match self {
            Self::Groq(client) | Self::OpenAi(client) => client.generate(prompt).await,
        }
    }
}

#[derive(Debug)]
pub struct ChatCompletionsClient {
    provider: &'static str,
    client: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl ChatCompletionsClient {
    fn new(kind: ProviderKind, api_key: String, model: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::InvalidResponse(format!("client setup: {e}")))?;
        Ok(Self {
            provider: kind.as_str(),
            client,
            url: format!("{}/chat/completions", kind.base_url()),
            api_key,
            model,
        })
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        log::debug!("Calling {} model {}", self.provider, self.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest {
                model: &self.model,
                messages: [
                    ChatMessage {
                        role: "system",
                        content: SYSTEM_MESSAGE,
                    },
                    ChatMessage {
                        role: "user",
                        content: prompt,
                    },
                ],
                temperature: 0.2,
            })
            .send()
            .await
            .map_err(|source| ProviderError::Unreachable {
                provider: self.provider,
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::BadStatus {
                provider: self.provider,
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("decode: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::InvalidResponse("no choices returned".to_string()))
    }
}
