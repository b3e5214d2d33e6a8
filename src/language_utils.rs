/*!
 * Language utilities for ISO language code handling.
 *
 * Validates ISO 639-1 (2-letter) and ISO 639-3 (3-letter) language codes
 * and resolves them to the English language names the translation prompt
 * is built from.
 */

use isolang::Language;

use crate::errors::ConfigError;

/// Parse a language code into an isolang Language
pub fn parse_language_code(code: &str) -> Result<Language, ConfigError> {
    let normalized_code = code.trim().to_lowercase();

    // Check for ISO 639-1 (2-letter) code
    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang);
        }
    }
    // Check for ISO 639-3 (3-letter) code
    else if normalized_code.len() == 3 {
        if let Some(lang) = Language::from_639_3(&normalized_code) {
            return Ok(lang);
        }
    }
    // Accept full English names as a convenience ("french", "Chinese")
    else if let Some(lang) = Language::from_name(&capitalize(&normalized_code)) {
        return Ok(lang);
    }

    Err(ConfigError::InvalidLanguage(code.to_string()))
}

/// Get the English name of a language from its code
pub fn get_language_name(code: &str) -> Result<&'static str, ConfigError> {
    let language = parse_language_code(code)?;
    Ok(language.to_name())
}

/// Check if a string is a valid language code
pub fn is_valid_language_code(code: &str) -> bool {
    parse_language_code(code).is_ok()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
