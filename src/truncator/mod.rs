//! Structure-preserving truncation pipeline.
//!
//! The engine runs fixed stages over a mutable kuchiki tree, each depending
//! only on the one before it:
//! parse → locate breakpoint → cut leaf → prune trailing subtrees →
//! strip punctuation / place ellipsis → serialize.
//!
//! All traversal state lives on the stack of a single call; nothing is shared
//! across invocations, so concurrent calls are safe as long as each works on
//! its own fragment.

pub mod composer;
pub mod cutter;
pub mod pruner;
pub mod walker;

use std::collections::HashSet;
use std::rc::Rc;

use anyhow::Result;
use kuchiki::NodeRef;

use crate::dom;

/// Measurement basis for the truncation limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimUnit {
    /// Unicode scalar values, counted after entity decoding.
    Chars,
    /// Maximal runs of non-whitespace characters.
    Words,
}

/// Tags inside which a bare ellipsis reads wrong: the ellipsis is placed
/// after the element's closing tag instead of nested within it.
pub const DEFAULT_AVOID_TAGS: &[&str] = &["a", "strong", "em", "h1", "h2", "h3", "h4", "h5"];

/// Identity comparison for tree nodes; `NodeRef` clones share one `Rc`.
pub(crate) fn same_node(a: &NodeRef, b: &NodeRef) -> bool {
    Rc::ptr_eq(&a.0, &b.0)
}

/// HTML truncation engine with a configurable avoid-set.
///
/// The free functions [`truncate_chars`] and [`truncate_words`] use the
/// default configuration; build a `Truncator` to extend the set of tags the
/// ellipsis must not be nested inside.
///
/// ```
/// use html_truncate::Truncator;
///
/// let truncator = Truncator::new().avoid_tag("span");
/// let out = truncator.truncate_chars("<p><span>Hello world</span></p>", 5, "...");
/// assert_eq!(out, "<p><span>Hello</span>...</p>");
/// ```
#[derive(Debug, Clone)]
pub struct Truncator {
    avoid_tags: HashSet<String>,
}

impl Default for Truncator {
    fn default() -> Self {
        Self::new()
    }
}

impl Truncator {
    /// Engine with the default avoid-set (anchors, emphasis, headings).
    pub fn new() -> Self {
        Self {
            avoid_tags: DEFAULT_AVOID_TAGS.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Add a tag to the avoid-set. Tag names are matched lowercase, the way
    /// the parser normalizes them.
    #[must_use]
    pub fn avoid_tag(mut self, tag: impl Into<String>) -> Self {
        self.avoid_tags.insert(tag.into().to_ascii_lowercase());
        self
    }

    /// The current avoid-set.
    pub fn avoid_tags(&self) -> &HashSet<String> {
        &self.avoid_tags
    }

    /// Truncate to at most `limit` characters of text content.
    pub fn truncate_chars(&self, html: &str, limit: usize, ellipsis: &str) -> String {
        self.truncate(html, limit, TrimUnit::Chars, ellipsis)
    }

    /// Truncate to at most `limit` words of text content.
    pub fn truncate_words(&self, html: &str, limit: usize, ellipsis: &str) -> String {
        self.truncate(html, limit, TrimUnit::Words, ellipsis)
    }

    /// Run the full pipeline for one fragment.
    ///
    /// Total over its inputs: a zero limit or content already within the
    /// limit returns the input unchanged, and an adapter failure degrades to
    /// the same fallback rather than erroring out.
    pub fn truncate(&self, html: &str, limit: usize, unit: TrimUnit, ellipsis: &str) -> String {
        if limit == 0 {
            return html.to_string();
        }
        match self.try_truncate(html, limit, unit, ellipsis) {
            Ok(Some(truncated)) => truncated,
            Ok(None) => html.to_string(),
            Err(e) => {
                log::warn!("truncation fell back to the original fragment: {e:#}");
                html.to_string()
            }
        }
    }

    /// `Ok(None)` means the content already fits and the caller should hand
    /// the input back untouched, byte for byte.
    fn try_truncate(
        &self,
        html: &str,
        limit: usize,
        unit: TrimUnit,
        ellipsis: &str,
    ) -> Result<Option<String>> {
        let root = dom::parse_fragment(html)?;
        if dom::text_length(&root, unit) <= limit {
            return Ok(None);
        }
        let Some(breakpoint) = walker::locate(&root, limit, unit) else {
            return Ok(None);
        };
        cutter::truncate_leaf(&breakpoint.leaf, breakpoint.offset);
        pruner::prune_after(&breakpoint.leaf, &root);
        composer::finish(&breakpoint.leaf, &root, ellipsis, &self.avoid_tags);
        dom::serialize_fragment(&root).map(Some)
    }
}

/// Truncate an HTML fragment to at most `limit` characters of text content,
/// using the default avoid-set.
pub fn truncate_chars(html: &str, limit: usize, ellipsis: &str) -> String {
    Truncator::new().truncate_chars(html, limit, ellipsis)
}

/// Truncate an HTML fragment to at most `limit` words of text content, using
/// the default avoid-set.
pub fn truncate_words(html: &str, limit: usize, ellipsis: &str) -> String {
    Truncator::new().truncate_words(html, limit, ellipsis)
}
