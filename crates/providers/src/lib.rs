//! # Grounded Providers
//!
//! The closed set of language-model backends that turn an assembled
//! grounding prompt into an answer.
//!
//! Dispatch is an enum, not a string-keyed map: [`ProviderKind::from_key`]
//! resolves request keys to a variant or fails with a typed error listing
//! the accepted keys, and [`ProviderKind::default`] is the explicit default
//! backend. Each variant exposes the single capability
//! `generate(prompt) → answer` over the OpenAI chat-completions wire shape.

mod error;
mod provider;

pub use error::{ProviderError, Result};
pub use provider::{ChatCompletionsClient, Provider, ProviderKind};
