/*!
 * Batch translation processing.
 *
 * Content blocks are joined with a separator token, translated in one
 * request, and split back into per-block translations. Models do not
 * always echo the separator faithfully, so the split falls back to line
 * boundaries when too few delimited parts come back.
 */

use log::{debug, warn};

use crate::errors::{ConfigError, TranslationError};
use crate::language_utils;

use super::core::TranslationService;
use super::prompts::build_translation_prompt;

/// Separator token placed between blocks in the combined prompt
pub const SEPARATOR: &str = "|||";

/// Fraction of the expected part count a delimited split must reach
const ACCEPTANCE_RATIO: f64 = 0.8;

/// How a batch response was split back into parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOutcome {
    /// The separator token survived and yielded enough parts
    Delimited,
    /// Too few delimited parts; the response was split on line boundaries
    NewlineFallback,
}

/// Batch translator joining blocks into a single provider request
#[derive(Debug)]
pub struct BatchTranslator {
    /// The translation service to use
    service: TranslationService,
}

impl BatchTranslator {
    /// Create a new batch translator
    pub fn new(service: TranslationService) -> Self {
        Self { service }
    }

    /// The underlying translation service
    pub fn service(&self) -> &TranslationService {
        &self.service
    }

    /// Translate a batch of texts into the target language
    ///
    /// An empty batch resolves immediately without touching the provider.
    /// The returned vector may be shorter or longer than the input when
    /// the model mangles the separator; callers pair entries positionally
    /// up to the shorter length.
    pub async fn translate(
        &self,
        texts: &[String],
        target_language: &str,
    ) -> Result<Vec<String>, TranslationError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        if target_language.trim().is_empty() {
            return Err(ConfigError::MissingTargetLanguage.into());
        }

        let language_name = language_utils::get_language_name(target_language)
            .map_err(TranslationError::Config)?;

        let combined = texts.join(SEPARATOR);
        let prompt = build_translation_prompt(language_name, SEPARATOR, &combined);

        debug!(
            "Translating batch of {} blocks into {}",
            texts.len(),
            language_name
        );

        let response = self.service.generate(&prompt).await?;
        let (parts, outcome) = split_batch_response(&response, texts.len());

        if outcome == SplitOutcome::NewlineFallback {
            warn!(
                "Separator lost in response ({} of {} parts); falling back to line splitting",
                response.split(SEPARATOR).count(),
                texts.len()
            );
        }

        Ok(parts)
    }
}

/// Split a batch response back into per-block parts
///
/// The delimited split is kept when it yields at least 80% of the expected
/// part count; otherwise the response is split on line boundaries. Parts
/// are not trimmed beyond a trailing carriage return, so inner formatting
/// survives.
pub fn split_batch_response(response: &str, expected: usize) -> (Vec<String>, SplitOutcome) {
    let parts: Vec<String> = response.split(SEPARATOR).map(str::to_string).collect();

    if parts.len() as f64 >= expected as f64 * ACCEPTANCE_RATIO {
        return (parts, SplitOutcome::Delimited);
    }

    let lines: Vec<String> = response
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();

    (lines, SplitOutcome::NewlineFallback)
}
