/*!
 * Unit tests for language code utilities
 */

use isolang::Language;
use pagelate::errors::ConfigError;
use pagelate::language_utils::{get_language_name, is_valid_language_code, parse_language_code};

#[test]
fn test_parseLanguageCode_commonTargets_shouldResolve() {
    assert_eq!(parse_language_code("zh").unwrap(), Language::Zho);
    assert_eq!(parse_language_code("es").unwrap(), Language::Spa);
    assert_eq!(parse_language_code("ko").unwrap(), Language::Kor);
}

#[test]
fn test_parseLanguageCode_invalid_shouldCarryOriginalInput() {
    let result = parse_language_code("klingon-ish");
    match result {
        Err(ConfigError::InvalidLanguage(code)) => assert_eq!(code, "klingon-ish"),
        other => panic!("expected InvalidLanguage, got {:?}", other),
    }
}

#[test]
fn test_getLanguageName_promptNames_shouldBeEnglish() {
    // Prompt construction relies on English names regardless of target
    assert_eq!(get_language_name("zh").unwrap(), "Chinese");
    assert_eq!(get_language_name("jpn").unwrap(), "Japanese");
    assert_eq!(get_language_name("pt").unwrap(), "Portuguese");
}

#[test]
fn test_isValidLanguageCode_rejectsNumbersAndEmpty() {
    assert!(!is_valid_language_code("12"));
    assert!(!is_valid_language_code(""));
    assert!(!is_valid_language_code("   "));
    assert!(is_valid_language_code("de"));
}
