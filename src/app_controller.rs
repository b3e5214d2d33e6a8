/*!
 * Application controller wiring extraction, translation, and rendering.
 */

use log::{debug, info};

use crate::app_config::Config;
use crate::dom;
use crate::errors::AppError;
use crate::extractor::Extractor;
use crate::renderer::Renderer;
use crate::translation::{BatchTranslator, TranslationService};

/// Main application controller for page translation
#[derive(Debug)]
pub struct Controller {
    config: Config,
    extractor: Extractor,
    renderer: Renderer,
    translator: BatchTranslator,
}

impl Controller {
    /// Create a new controller from a validated configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let service = TranslationService::new(config.translation.clone())
            .map_err(AppError::Translation)?;
        Ok(Self::assemble(config, service))
    }

    /// Create a controller over an existing translation service
    ///
    /// Bypasses validation so tests can pair a keyless configuration with
    /// a scripted provider.
    pub fn with_service(config: Config, service: TranslationService) -> Self {
        Self::assemble(config, service)
    }

    fn assemble(config: Config, service: TranslationService) -> Self {
        Self {
            extractor: Extractor::new(),
            renderer: Renderer::new(config.insert_mode),
            translator: BatchTranslator::new(service),
            config,
        }
    }

    /// The configuration this controller runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Total tokens consumed so far by this controller's requests
    pub fn total_tokens(&self) -> u64 {
        self.translator.service().total_tokens()
    }

    /// Translate a full HTML document
    ///
    /// Extracts content blocks, translates them in one batch, injects the
    /// results, and serializes the modified document. A document with no
    /// translatable content passes through without any provider request.
    pub async fn translate_html(&self, input: &[u8]) -> Result<Vec<u8>, AppError> {
        let page = dom::html_to_dom(input);
        let blocks = self.extractor.extract(&page.document);

        if blocks.is_empty() {
            info!("No translatable content blocks found; document unchanged");
            return Ok(dom::serialize_document(&page)?);
        }

        debug!("Extracted {} content blocks", blocks.len());

        let texts: Vec<String> = blocks.iter().map(|b| b.text.clone()).collect();
        let translations = self
            .translator
            .translate(&texts, &self.config.target_language)
            .await?;

        let injected = self.renderer.render(&page, &blocks, &translations);
        info!(
            "Injected {} of {} translations ({} tokens used)",
            injected,
            blocks.len(),
            self.total_tokens()
        );

        Ok(dom::serialize_document(&page)?)
    }

    /// Extract and return block texts without translating
    ///
    /// Backs the inspection flow that shows what would be sent to the
    /// provider.
    pub fn list_blocks(&self, input: &[u8]) -> Vec<String> {
        let page = dom::html_to_dom(input);
        self.extractor
            .extract(&page.document)
            .into_iter()
            .map(|block| block.text)
            .collect()
    }
}
