/*!
 * Unit tests for content-block extraction
 */

use pagelate::dom::{self, html_to_dom};
use pagelate::extractor::{Extractor, ExtractorConfig, PROCESSED_MARK};

use crate::common::{LONG_SENTENCE, sample_article};

#[test]
fn test_extract_sampleArticle_shouldSelectHeadlineAndParagraphs() {
    let page = html_to_dom(sample_article().as_bytes());
    let blocks = Extractor::new().extract(&page.document);

    assert_eq!(blocks.len(), 3);
    assert!(blocks[0].text.starts_with("A headline"));
    assert!(blocks[1].text.starts_with("First paragraph."));
    assert!(blocks[2].text.starts_with("Second paragraph."));
}

#[test]
fn test_extract_shouldMarkSelectedElements() {
    let page = html_to_dom(sample_article().as_bytes());
    let blocks = Extractor::new().extract(&page.document);

    for block in &blocks {
        assert!(dom::has_class(&block.node, PROCESSED_MARK));
    }

    // The marker must survive serialization
    let html = String::from_utf8(dom::serialize_document(&page).unwrap()).unwrap();
    assert_eq!(html.matches(PROCESSED_MARK).count(), 3);
}

#[test]
fn test_extract_isIdempotentAcrossExtractorInstances() {
    let page = html_to_dom(sample_article().as_bytes());

    assert_eq!(Extractor::new().extract(&page.document).len(), 3);
    assert!(Extractor::new().extract(&page.document).is_empty());
}

#[test]
fn test_extract_definitionAndTableCells_shouldQualify() {
    let html = format!(
        "<body><dl><dt>Term {LONG_SENTENCE}</dt><dd>Definition {LONG_SENTENCE}</dd></dl>\
         <table><tr><td>Cell {LONG_SENTENCE}</td></tr></table></body>"
    );
    let page = html_to_dom(html.as_bytes());

    let blocks = Extractor::new().extract(&page.document);
    let tags: Vec<&str> = blocks
        .iter()
        .filter_map(|b| dom::get_node_name(&b.node))
        .collect();
    assert_eq!(tags, vec!["dt", "dd", "td"]);
}

#[test]
fn test_extract_deeplyNestedContainers_shouldSelectInnermostLeaf() {
    let html = format!("<body><div><div><div>{LONG_SENTENCE}</div></div></div></body>");
    let page = html_to_dom(html.as_bytes());

    let blocks = Extractor::new().extract(&page.document);
    assert_eq!(blocks.len(), 1);
    // Outer containers hold a nested candidate, so only the leaf is taken
    assert!(blocks[0].node.children.borrow().iter().all(|c| {
        !matches!(c.data, markup5ever_rcdom::NodeData::Element { .. })
    }));
}

#[test]
fn test_extract_boundaryLength_isExclusive() {
    // Exactly at the floor is not enough; one char over is
    let at_floor = "a".repeat(15);
    let over_floor = "b".repeat(16);
    let html = format!("<body><p>{at_floor}</p><p>{over_floor}</p></body>");
    let page = html_to_dom(html.as_bytes());

    let blocks = Extractor::new().extract(&page.document);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text, over_floor);
}

#[test]
fn test_extract_lengthCountsCharsNotBytes() {
    // 16 CJK chars exceed the 15-char floor even though each is 3 bytes
    let cjk = "这是一段足够长的中文测试文字内容";
    let html = format!("<body><p>{cjk}</p></body>");
    let page = html_to_dom(html.as_bytes());

    let blocks = Extractor::new().extract(&page.document);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text, cjk);
}

#[test]
fn test_extract_customMinLength_shouldWidenSelection() {
    let page = html_to_dom(b"<body><p>Tiny text.</p></body>");
    let extractor = Extractor::with_config(ExtractorConfig { min_text_length: 3 });

    assert_eq!(extractor.extract(&page.document).len(), 1);
}
