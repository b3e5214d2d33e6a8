/*!
 * Translation rendering.
 *
 * This module injects translated text back into the document, either as a
 * sibling element after each original block or by wrapping the original
 * and its translation in a shared container.
 */

use log::warn;
use markup5ever_rcdom::RcDom;
use serde::{Deserialize, Serialize};

use crate::dom;
use crate::extractor::{ContentBlock, TRANSLATION_CLASS, WRAPPER_CLASS};

/// How a translation is attached to its original block
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InsertMode {
    /// Insert the translation as the next sibling of the original
    #[default]
    After,
    /// Wrap original and translation together in a container element
    Wrap,
}

/// Renderer placing translations into the document
#[derive(Debug, Default)]
pub struct Renderer {
    mode: InsertMode,
}

impl Renderer {
    /// Create a renderer with the given insertion mode
    pub fn new(mode: InsertMode) -> Self {
        Self { mode }
    }

    /// Inject translations next to their source blocks
    ///
    /// Blocks and translations are paired positionally. A count mismatch is
    /// logged and the surplus on either side is dropped; translations that
    /// are empty after trimming are skipped. Returns the number of
    /// translations actually injected.
    pub fn render(&self, dom: &RcDom, blocks: &[ContentBlock], translations: &[String]) -> usize {
        if blocks.len() != translations.len() {
            warn!(
                "Pairing {} blocks with {} translations; surplus entries are dropped",
                blocks.len(),
                translations.len()
            );
        }

        let mut injected = 0;
        for (block, translation) in blocks.iter().zip(translations.iter()) {
            if translation.trim().is_empty() {
                continue;
            }

            let element = dom::create_html_element(dom, "div", Some(TRANSLATION_CLASS));
            dom::append_child(&element, dom::create_text_node(translation.trim()));

            let placed = match self.mode {
                InsertMode::After => dom::insert_sibling_after(&block.node, element),
                InsertMode::Wrap => {
                    let wrapper = dom::create_html_element(dom, "div", Some(WRAPPER_CLASS));
                    if dom::replace_in_parent(&block.node, &wrapper) {
                        dom::append_child(&wrapper, block.node.clone());
                        dom::append_child(&wrapper, element);
                        true
                    } else {
                        false
                    }
                }
            };

            if placed {
                injected += 1;
            } else {
                warn!("Block detached from document; translation dropped");
            }
        }

        injected
    }
}
