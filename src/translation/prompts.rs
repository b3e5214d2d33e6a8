/*!
 * Prompt templates for translation requests.
 */

/// Build the batch translation prompt
///
/// The instruction asks the model to keep the separator intact so the
/// response can be split back into one translation per input block.
pub fn build_translation_prompt(language_name: &str, separator: &str, combined: &str) -> String {
    format!(
        "Translate the following texts into {}. Preserve the original structure \
         and the separator \"{}\" between each text block:\n\n{}",
        language_name, separator, combined
    )
}
