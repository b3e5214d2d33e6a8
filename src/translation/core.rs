/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct, which owns the
 * provider connection and accounts for token consumption across requests.
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::app_config::TranslationConfig;
use crate::errors::{ConfigError, TranslationError};
use crate::providers::Provider;
use crate::providers::gemini::Gemini;

/// Running total of tokens consumed by translation requests
///
/// The counter is atomic so concurrent requests sharing one service can
/// record their usage without coordination.
#[derive(Debug, Default)]
pub struct TokenUsage {
    total: AtomicU64,
}

impl TokenUsage {
    /// Create a new zeroed usage counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the token count of a completed request, if reported
    pub fn record(&self, total_tokens: Option<u64>) {
        if let Some(tokens) = total_tokens {
            self.total.fetch_add(tokens, Ordering::SeqCst);
        }
    }

    /// Total tokens recorded so far
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::SeqCst)
    }
}

/// Translation service orchestrating provider requests
#[derive(Debug)]
pub struct TranslationService {
    /// The provider handling completion requests
    provider: Box<dyn Provider>,

    /// Provider configuration
    config: TranslationConfig,

    /// Accumulated token usage across requests
    usage: Arc<TokenUsage>,
}

impl TranslationService {
    /// Create a new translation service backed by the Gemini API
    ///
    /// # Arguments
    /// * `config` - The translation configuration, including the API key
    ///
    /// # Returns
    /// * `Result<TranslationService, TranslationError>` - The service or a
    ///   configuration error when the API key is missing
    pub fn new(config: TranslationConfig) -> Result<Self, TranslationError> {
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }

        let provider = Gemini::new(
            config.api_key.clone(),
            config.model.clone(),
            config.endpoint.clone(),
            config.timeout_secs,
        );

        Ok(Self {
            provider: Box::new(provider),
            config,
            usage: Arc::new(TokenUsage::new()),
        })
    }

    /// Create a translation service over an arbitrary provider
    ///
    /// Used by the test suite to inject scripted providers.
    pub fn with_provider(config: TranslationConfig, provider: Box<dyn Provider>) -> Self {
        Self {
            provider,
            config,
            usage: Arc::new(TokenUsage::new()),
        }
    }

    /// The configuration this service was built from
    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }

    /// Shared handle to the token usage counter
    pub fn usage(&self) -> Arc<TokenUsage> {
        Arc::clone(&self.usage)
    }

    /// Total tokens consumed by requests issued through this service
    pub fn total_tokens(&self) -> u64 {
        self.usage.total()
    }

    /// Send a prompt to the provider and return the completion text
    ///
    /// Reported token usage is folded into the running total before the
    /// text is handed back.
    pub async fn generate(&self, prompt: &str) -> Result<String, TranslationError> {
        debug!(
            "Sending prompt of {} chars to provider '{}' (model {})",
            prompt.chars().count(),
            self.provider.name(),
            self.config.model
        );

        let completion = self.provider.complete(prompt).await?;
        self.usage.record(completion.total_tokens);

        Ok(completion.text)
    }
}
