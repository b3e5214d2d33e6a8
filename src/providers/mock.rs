/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds, echoing the prompt
 * - `MockProvider::returning(text)` - Always succeeds with a canned reply
 * - `MockProvider::failing()` - Always fails with an API error
 * - `MockProvider::malformed()` - Fails the way an empty candidates array does
 * - `MockProvider::empty()` - Succeeds with an empty completion
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{Completion, Provider};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds, with the canned reply or an echo of the prompt
    Working,
    /// Always fails with an API error
    Failing,
    /// Fails with a malformed-response error
    Malformed,
    /// Returns an empty completion
    Empty,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of completed calls, shared across clones
    request_count: Arc<AtomicUsize>,
    /// Canned reply used in the working mode
    canned_response: Option<String>,
    /// Token count attached to successful completions
    total_tokens: Option<u64>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            canned_response: None,
            total_tokens: None,
        }
    }

    /// Create a working mock provider that echoes the prompt
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a working mock provider with a canned reply
    pub fn returning(text: impl Into<String>) -> Self {
        let mut provider = Self::new(MockBehavior::Working);
        provider.canned_response = Some(text.into());
        provider
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that reports a malformed response
    pub fn malformed() -> Self {
        Self::new(MockBehavior::Malformed)
    }

    /// Create a mock that returns empty completions
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Attach a token count to successful completions
    pub fn with_tokens(mut self, total_tokens: u64) -> Self {
        self.total_tokens = Some(total_tokens);
        self
    }

    /// Number of completion calls made so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            canned_response: self.canned_response.clone(),
            total_tokens: self.total_tokens,
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, prompt: &str) -> Result<Completion, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => {
                let text = self
                    .canned_response
                    .clone()
                    .unwrap_or_else(|| format!("[TRANSLATED] {}", prompt));

                Ok(Completion {
                    text,
                    total_tokens: self.total_tokens,
                })
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::Malformed => Err(ProviderError::MalformedResponse(
                "response contained no candidate text parts".to_string(),
            )),

            MockBehavior::Empty => Ok(Completion {
                text: String::new(),
                total_tokens: self.total_tokens,
            }),
        }
    }
}
