/*!
 * Content-block extraction.
 *
 * This module walks a parsed HTML document and selects the elements worth
 * translating: visible blocks of prose that are not navigation chrome and
 * are not nested inside another selected block. Selected elements are
 * tagged with a marker class so repeated extraction over the same document
 * returns nothing new.
 */

use markup5ever_rcdom::{Handle, NodeData};

use crate::dom;

/// Class applied to every selected block, guarding against re-selection
pub const PROCESSED_MARK: &str = "pagelate-block";

/// Class carried by injected translation elements
pub const TRANSLATION_CLASS: &str = "pagelate-translation";

/// Class carried by wrapper elements in wrap insertion mode
pub const WRAPPER_CLASS: &str = "pagelate-wrapper";

/// Tags that qualify as standalone content blocks
const BLOCK_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "blockquote", "dd", "dt", "td",
];

/// Generic container tags, selected only when they hold no nested block
const CONTAINER_TAGS: &[&str] = &["div", "span"];

/// Subtrees that never contribute content blocks
const EXCLUDED_ANCESTORS: &[&str] = &["a", "button", "nav", "header", "footer", "style", "script"];

/// A DOM element judged to contain standalone translatable text
#[derive(Debug, Clone)]
pub struct ContentBlock {
    /// The selected element
    pub node: Handle,

    /// Its whitespace-normalized text content
    pub text: String,
}

/// Configuration for the extraction heuristic
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Minimum trimmed text length (in chars) for a block to qualify
    pub min_text_length: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_text_length: 15,
        }
    }
}

/// Content-block extractor
///
/// Extraction is a two-phase process: the full candidate set is collected
/// first and the marker class is applied afterwards, so a panic mid-walk
/// cannot leave the document partially marked.
#[derive(Debug, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create an extractor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with a custom configuration
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract content blocks from the subtree rooted at `root`
    ///
    /// Blocks are returned in document order. Every returned element is
    /// marked with [`PROCESSED_MARK`] before this function returns, so a
    /// second call over the same document yields an empty vector.
    pub fn extract(&self, root: &Handle) -> Vec<ContentBlock> {
        let mut blocks = Vec::new();
        self.walk(root, &mut blocks);

        for block in &blocks {
            dom::add_class(&block.node, PROCESSED_MARK);
        }

        blocks
    }

    fn walk(&self, node: &Handle, blocks: &mut Vec<ContentBlock>) {
        if let NodeData::Element { ref name, .. } = node.data {
            let tag = name.local.as_ref();

            // Nothing inside navigation or interactive regions qualifies
            if EXCLUDED_ANCESTORS.contains(&tag) {
                return;
            }

            // Skip already-processed blocks and previously injected
            // translations, including everything nested inside them
            if dom::has_class(node, PROCESSED_MARK)
                || dom::has_class(node, TRANSLATION_CLASS)
                || dom::has_class(node, WRAPPER_CLASS)
            {
                return;
            }

            if !is_visibly_rendered(node) {
                return;
            }

            if is_block_tag(tag) || is_container_tag(tag) {
                let text = normalize_whitespace(&dom::text_content(node));
                let long_enough = text.chars().count() > self.config.min_text_length;

                // Containers holding other candidate blocks are skipped so
                // their children get selected individually instead of
                // translating the whole container twice
                let selectable = long_enough
                    && !(is_container_tag(tag) && contains_candidate_element(node));

                if selectable {
                    blocks.push(ContentBlock {
                        node: node.clone(),
                        text,
                    });
                    // Descendants of a selected block are never selected
                    return;
                }
            }
        }

        for child in node.children.borrow().iter() {
            self.walk(child, blocks);
        }
    }
}

fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

fn is_container_tag(tag: &str) -> bool {
    CONTAINER_TAGS.contains(&tag)
}

/// Static approximation of "has a layout box"
///
/// Without a layout engine, visibility is judged from markup alone: the
/// `hidden` attribute, `aria-hidden="true"`, and inline styles that
/// disable display or visibility.
fn is_visibly_rendered(node: &Handle) -> bool {
    if dom::get_node_attr(node, "hidden").is_some() {
        return false;
    }

    if dom::get_node_attr(node, "aria-hidden").as_deref() == Some("true") {
        return false;
    }

    if let Some(style) = dom::get_node_attr(node, "style") {
        let style: String = style
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if style.contains("display:none") || style.contains("visibility:hidden") {
            return false;
        }
    }

    true
}

/// Check whether any descendant element is itself a candidate tag
fn contains_candidate_element(node: &Handle) -> bool {
    for child in node.children.borrow().iter() {
        if let NodeData::Element { ref name, .. } = child.data {
            let tag = name.local.as_ref();
            if is_block_tag(tag) || is_container_tag(tag) {
                return true;
            }
        }
        if contains_candidate_element(child) {
            return true;
        }
    }
    false
}

/// Collapse runs of whitespace into single spaces and trim the ends
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
