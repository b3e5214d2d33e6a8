/*!
 * Provider implementations for translation services.
 *
 * This module contains client implementations for LLM providers:
 * - Gemini: Google generative language API integration
 * - Mock: scripted provider used by the test suite
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single completion returned by a provider
#[derive(Debug, Clone)]
pub struct Completion {
    /// The generated text
    pub text: String,

    /// Total token count reported by the provider, when available
    pub total_tokens: Option<u64>,
}

/// Common trait for all LLM providers
///
/// This trait defines the narrow surface the translation service relies
/// on: turn one prompt into one completion. It is object-safe so the
/// service can hold any provider behind a `Box<dyn Provider>`.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Human-readable provider name used in log output
    fn name(&self) -> &'static str;

    /// Complete a prompt using this provider
    ///
    /// # Arguments
    /// * `prompt` - The full prompt to send
    ///
    /// # Returns
    /// * `Result<Completion, ProviderError>` - The completion or an error
    async fn complete(&self, prompt: &str) -> Result<Completion, ProviderError>;
}

pub mod gemini;
pub mod mock;
