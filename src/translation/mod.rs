/*!
 * Translation service for page content using AI providers.
 *
 * This module contains the core functionality for translating extracted
 * content blocks. It is split into several submodules:
 *
 * - `core`: Core translation service and token usage tracking
 * - `batch`: Batch protocol joining blocks with a separator token
 * - `prompts`: Prompt templates for translation requests
 */

// Re-export main types for easier usage
pub use self::batch::{BatchTranslator, SplitOutcome, SEPARATOR};
pub use self::core::{TokenUsage, TranslationService};

// Submodules
pub mod batch;
pub mod core;
pub mod prompts;
