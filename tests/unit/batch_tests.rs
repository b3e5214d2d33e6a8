/*!
 * Unit tests for the batch translation protocol
 */

use pagelate::app_config::TranslationConfig;
use pagelate::errors::{ConfigError, TranslationError};
use pagelate::providers::mock::MockProvider;
use pagelate::translation::batch::{SplitOutcome, split_batch_response};
use pagelate::translation::{BatchTranslator, SEPARATOR, TranslationService};

fn translator_with(provider: MockProvider) -> BatchTranslator {
    let config = TranslationConfig {
        api_key: "test-api-key".to_string(),
        ..Default::default()
    };
    BatchTranslator::new(TranslationService::with_provider(config, Box::new(provider)))
}

#[test]
fn test_split_singleText_shouldReturnSinglePart() {
    let (parts, outcome) = split_batch_response("une seule traduction", 1);
    assert_eq!(outcome, SplitOutcome::Delimited);
    assert_eq!(parts, vec!["une seule traduction"]);
}

#[test]
fn test_split_extraParts_shouldStillBeDelimited() {
    // The model inserted a separator inside a translation; more parts than
    // expected are kept, callers pair positionally
    let (parts, outcome) = split_batch_response("a|||b|||c", 2);
    assert_eq!(outcome, SplitOutcome::Delimited);
    assert_eq!(parts.len(), 3);
}

#[test]
fn test_split_halfOfExpected_shouldFallBackToLines() {
    // One part out of two expected is 50%, under the 80% floor
    let (parts, outcome) = split_batch_response("Bonjour\nMonde", 2);
    assert_eq!(outcome, SplitOutcome::NewlineFallback);
    assert_eq!(parts, vec!["Bonjour", "Monde"]);
}

#[test]
fn test_split_separatorFullyLost_shouldUseLines() {
    let response = "ligne un\nligne deux\nligne trois\nligne quatre";
    let (parts, outcome) = split_batch_response(response, 4);
    assert_eq!(outcome, SplitOutcome::NewlineFallback);
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[3], "ligne quatre");
}

#[tokio::test]
async fn test_translate_shouldPairTranslationsInOrder() {
    let translator = translator_with(MockProvider::returning("Un|||Deux|||Trois"));
    let texts = vec![
        "One".to_string(),
        "Two".to_string(),
        "Three".to_string(),
    ];

    let result = translator.translate(&texts, "fr").await.unwrap();
    assert_eq!(result, vec!["Un", "Deux", "Trois"]);
}

#[tokio::test]
async fn test_translate_newlineFallback_shouldRecoverAllParts() {
    // Three inputs but the response carries no separator at all: 1 part
    // out of 3 is under the acceptance floor, so lines win
    let translator = translator_with(MockProvider::returning("Un\nDeux\nTrois"));
    let texts = vec![
        "One".to_string(),
        "Two".to_string(),
        "Three".to_string(),
    ];

    let result = translator.translate(&texts, "fr").await.unwrap();
    assert_eq!(result, vec!["Un", "Deux", "Trois"]);
}

#[tokio::test]
async fn test_translate_singleRequestPerBatch() {
    let provider = MockProvider::returning("a|||b|||c|||d|||e");
    let probe = provider.clone();
    let translator = translator_with(provider);

    let texts: Vec<String> = (0..5).map(|i| format!("block number {}", i)).collect();
    translator.translate(&texts, "es").await.unwrap();

    assert_eq!(probe.request_count(), 1);
}

#[tokio::test]
async fn test_translate_promptCarriesSeparatorBetweenBlocks() {
    // The echoing mock reflects the prompt back, exposing its structure
    let translator = translator_with(MockProvider::working());
    let texts = vec!["alpha block".to_string(), "beta block".to_string()];

    let echoed = translator.translate(&texts, "fr").await.unwrap().join(SEPARATOR);
    assert!(echoed.contains("alpha block|||beta block"));
    assert!(echoed.contains("into French"));
}

#[tokio::test]
async fn test_translate_threeLetterCode_shouldResolve() {
    let translator = translator_with(MockProvider::working());
    let texts = vec!["gamma block".to_string()];

    let echoed = translator.translate(&texts, "deu").await.unwrap().join(SEPARATOR);
    assert!(echoed.contains("into German"));
}

#[tokio::test]
async fn test_translate_invalidLanguage_shouldFailBeforeRequest() {
    let provider = MockProvider::working();
    let probe = provider.clone();
    let translator = translator_with(provider);
    let texts = vec!["delta block".to_string()];

    let result = translator.translate(&texts, "zzz").await;
    assert!(matches!(
        result,
        Err(TranslationError::Config(ConfigError::InvalidLanguage(_)))
    ));
    assert_eq!(probe.request_count(), 0);
}

#[tokio::test]
async fn test_translate_tokenUsage_shouldAccumulateAcrossBatches() {
    let provider = MockProvider::returning("traduit").with_tokens(100);
    let translator = translator_with(provider);
    let texts = vec!["epsilon block".to_string()];

    translator.translate(&texts, "fr").await.unwrap();
    translator.translate(&texts, "fr").await.unwrap();

    assert_eq!(translator.service().total_tokens(), 200);
}
