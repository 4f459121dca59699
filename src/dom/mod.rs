//! Tree adapter between HTML fragment strings and the kuchiki DOM.
//!
//! The truncation pipeline never touches raw markup; it works on a mutable
//! node tree. This module owns the boundary in both directions:
//! - parse a fragment into a tree and hand back its container node
//! - measure plain-text length (tags stripped) in characters or words
//! - serialize the container's children back to a fragment string
//!
//! kuchiki runs the full html5ever tree construction, so entities are decoded
//! into text nodes on parse, unclosed tags are auto-closed, and special
//! characters are re-encoded on serialization.

use anyhow::{Context, Result};
use kuchiki::NodeRef;
use kuchiki::iter::NodeIterator;
use kuchiki::traits::TendrilSink;

use crate::truncator::TrimUnit;

/// Parse an HTML fragment and return the node holding its content.
///
/// html5ever wraps every input in a synthetic `<html><head><body>` scaffold;
/// the `<body>` element is the container the fragment's nodes land under and
/// serves as the tree root for the rest of the pipeline.
pub fn parse_fragment(html: &str) -> Result<NodeRef> {
    let document = kuchiki::parse_html().one(html);
    let body = document
        .select_first("body")
        .map_err(|()| anyhow::anyhow!("parsed document has no body element"))?;
    Ok(body.as_node().clone())
}

/// Serialize the fragment root's children back to an HTML string.
///
/// Serializing the container itself would re-introduce the `<body>` wrapper,
/// so each child is serialized separately in document order.
pub fn serialize_fragment(root: &NodeRef) -> Result<String> {
    let mut output = Vec::new();
    for child in root.children() {
        child
            .serialize(&mut output)
            .context("failed to serialize truncated fragment")?;
    }
    String::from_utf8(output).context("serialized fragment is not valid UTF-8")
}

/// Plain-text length of the tree in the given unit, tags stripped.
///
/// Counts leaf by leaf so the result matches what the counting walker sees:
/// characters are Unicode scalar values, words are maximal non-whitespace
/// runs within a single text node.
pub fn text_length(root: &NodeRef, unit: TrimUnit) -> usize {
    root.descendants()
        .text_nodes()
        .map(|leaf| {
            let text = leaf.borrow();
            match unit {
                TrimUnit::Chars => text.chars().count(),
                TrimUnit::Words => text.split_whitespace().count(),
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_nested_markup() {
        let html = r#"<p>Check <a href="/x">this</a> and <strong>that</strong>.</p>"#;
        let root = parse_fragment(html).unwrap();
        assert_eq!(serialize_fragment(&root).unwrap(), html);
    }

    #[test]
    fn round_trips_bare_text_without_wrappers() {
        let root = parse_fragment("just some text").unwrap();
        let out = serialize_fragment(&root).unwrap();
        assert_eq!(out, "just some text");
        assert!(!out.contains("<body"));
    }

    #[test]
    fn decodes_entities_into_text_nodes() {
        let root = parse_fragment("<p>5 &lt; 10 &amp; 10 &gt; 5</p>").unwrap();
        // Entity-decoded: "5 < 10 & 10 > 5" is 15 characters.
        assert_eq!(text_length(&root, TrimUnit::Chars), 15);
        // Re-encoded on serialization.
        let out = serialize_fragment(&root).unwrap();
        assert!(out.contains("&lt;"));
        assert!(out.contains("&amp;"));
    }

    #[test]
    fn counts_words_across_leaves() {
        let root = parse_fragment("<p>one <em>two three</em> four</p>").unwrap();
        assert_eq!(text_length(&root, TrimUnit::Words), 4);
    }

    #[test]
    fn counts_chars_as_scalar_values() {
        let root = parse_fragment("<p>héllo 🎉</p>").unwrap();
        assert_eq!(text_length(&root, TrimUnit::Chars), 7);
    }

    #[test]
    fn tolerates_unclosed_tags() {
        let root = parse_fragment("<p>open <strong>bold").unwrap();
        let out = serialize_fragment(&root).unwrap();
        assert_eq!(out, "<p>open <strong>bold</strong></p>");
    }
}
