use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::{Client, header};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{Completion, Provider};

/// Gemini client for interacting with the generative language API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Model name (e.g., "gemini-pro")
    model: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
}

/// Gemini generateContent request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// The conversation contents
    contents: Vec<GeminiContent>,
}

/// A content entry holding one or more parts
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// The parts of this content entry
    pub parts: Vec<GeminiPart>,
}

/// A single text part
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    /// The actual text content
    pub text: String,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// The generated candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,

    /// Token usage information
    #[serde(rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,
}

/// Individual candidate in a Gemini response
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// The generated content
    pub content: Option<GeminiContent>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct UsageMetadata {
    /// Total number of tokens consumed by the request
    #[serde(rename = "totalTokenCount")]
    pub total_token_count: Option<u64>,
}

impl GeminiRequest {
    /// Create a new request carrying a single text prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

impl GeminiResponse {
    /// Extract the first text part of the first candidate
    ///
    /// This is the only response shape the translation flow understands;
    /// anything else is reported as a malformed response.
    pub fn first_text(&self) -> Result<&str, ProviderError> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
            .ok_or_else(|| {
                ProviderError::MalformedResponse(
                    "response contained no candidate text parts".to_string(),
                )
            })
    }

    /// Total token count reported by the API, when present
    pub fn total_tokens(&self) -> Option<u64> {
        self.usage_metadata
            .as_ref()
            .and_then(|usage| usage.total_token_count)
    }
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Issue a generateContent request
    pub async fn generate(&self, request: GeminiRequest) -> Result<GeminiResponse, ProviderError> {
        let endpoint = if self.endpoint.is_empty() {
            "https://generativelanguage.googleapis.com"
        } else {
            self.endpoint.as_str()
        };
        let mut api_url = Url::parse(endpoint)
            .and_then(|base| {
                base.join(&format!("/v1beta/models/{}:generateContent", self.model))
            })
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint URL: {}", e)))?;
        // The key travels in the query string, so the URL must never be logged
        api_url.query_pairs_mut().append_pair("key", &self.api_key);

        let response = self
            .client
            .post(api_url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ProviderError::RequestFailed(format!("Failed to send request to Gemini API: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response.json::<GeminiResponse>().await.map_err(|e| {
            ProviderError::ParseError(format!("Failed to parse Gemini API response: {}", e))
        })
    }
}

#[async_trait]
impl Provider for Gemini {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<Completion, ProviderError> {
        let response = self.generate(GeminiRequest::new(prompt)).await?;
        let total_tokens = response.total_tokens();
        let text = response.first_text()?.to_string();

        Ok(Completion { text, total_tokens })
    }
}
