/*!
 * Unit tests for provider implementations
 */

use pagelate::errors::ProviderError;
use pagelate::providers::Provider;
use pagelate::providers::gemini::{Gemini, GeminiRequest, GeminiResponse};
use pagelate::providers::mock::{MockBehavior, MockProvider};

#[test]
fn test_geminiRequest_wireFormat_matchesGenerateContent() {
    let request = GeminiRequest::new("Translate: bonjour");
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["contents"][0]["parts"][0]["text"], "Translate: bonjour");
    assert_eq!(json["contents"].as_array().unwrap().len(), 1);
}

#[test]
fn test_geminiResponse_multipleCandidates_firstWins() {
    let body = r#"{
        "candidates": [
            { "content": { "parts": [ { "text": "primary" } ] } },
            { "content": { "parts": [ { "text": "secondary" } ] } }
        ]
    }"#;
    let response: GeminiResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.first_text().unwrap(), "primary");
}

#[test]
fn test_geminiResponse_multipleParts_firstWins() {
    let body = r#"{
        "candidates": [
            { "content": { "parts": [ { "text": "part one" }, { "text": "part two" } ] } }
        ]
    }"#;
    let response: GeminiResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.first_text().unwrap(), "part one");
}

#[test]
fn test_geminiResponse_unknownFields_areTolerated() {
    let body = r#"{
        "candidates": [
            { "content": { "parts": [ { "text": "ok" } ] }, "finishReason": "STOP", "index": 0 }
        ],
        "modelVersion": "gemini-pro-001"
    }"#;
    let response: GeminiResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.first_text().unwrap(), "ok");
}

#[test]
fn test_gemini_name_shouldBeStable() {
    let provider = Gemini::new("key", "gemini-pro", "", 30);
    assert_eq!(provider.name(), "gemini");
}

#[tokio::test]
async fn test_mockProvider_emptyBehavior_returnsEmptyText() {
    let provider = MockProvider::new(MockBehavior::Empty);
    let completion = provider.complete("anything").await.unwrap();
    assert!(completion.text.is_empty());
}

#[tokio::test]
async fn test_mockProvider_countsFailedCallsToo() {
    let provider = MockProvider::failing();

    let _ = provider.complete("one").await;
    let _ = provider.complete("two").await;
    assert_eq!(provider.request_count(), 2);
}

#[tokio::test]
async fn test_mockProvider_errorsMatchProviderTaxonomy() {
    let failing = MockProvider::failing().complete("x").await;
    assert!(matches!(failing, Err(ProviderError::ApiError { .. })));

    let malformed = MockProvider::malformed().complete("x").await;
    assert!(matches!(malformed, Err(ProviderError::MalformedResponse(_))));
}
