/*!
 * # pagelate - HTML page translation with AI
 *
 * A Rust library for translating the textual content of HTML pages using
 * an LLM completion endpoint.
 *
 * ## Features
 *
 * - Extract translatable content blocks from an HTML document
 * - Translate all blocks in a single batched API request
 * - Inject translations next to the original elements (wrap or append)
 * - Idempotent extraction: already-translated blocks are never re-selected
 * - Configurable target language, model, and insertion mode
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `dom`: Thin helpers over html5ever/rcdom
 * - `extractor`: Content-block selection heuristic
 * - `translation`: Batched translation over an LLM provider:
 *   - `translation::core`: Translation service and token accounting
 *   - `translation::batch`: Delimiter-based batching protocol
 *   - `translation::prompts`: Prompt construction
 * - `renderer`: Injection of translated text into the DOM
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `providers`: LLM provider clients:
 *   - `providers::gemini`: Gemini generateContent API client
 *   - `providers::mock`: Mock provider for testing
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod dom;
pub mod errors;
pub mod extractor;
pub mod language_utils;
pub mod providers;
pub mod renderer;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use extractor::{ContentBlock, Extractor};
pub use renderer::{InsertMode, Renderer};
pub use translation::{BatchTranslator, TranslationService};
pub use errors::{AppError, ConfigError, ProviderError, TranslationError};
