//! Trailer composer: strips dangling punctuation and places the ellipsis.

use std::collections::HashSet;
use std::sync::LazyLock;

use kuchiki::NodeRef;
use regex::Regex;

use super::same_node;

/// Sentence-terminal punctuation (plus any whitespace) left dangling by the
/// cut. Stripped so the output never reads like `"Hello,..."`.
static TRAILING_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s.,:;?!…]+$").expect("TRAILING_PUNCT_RE: hardcoded regex is valid")
});

/// Strip dangling punctuation from the breakpoint leaf, then attach the
/// ellipsis where it reads naturally.
///
/// When the leaf's immediate parent element is in the avoid-set (links,
/// emphasis, headings), the ellipsis goes into a new text node right after
/// that element's closing tag instead of inside it. The fragment root never
/// receives a sibling; when the parent has nowhere to attach one, the
/// ellipsis falls back onto the leaf itself. At most one text mutation and
/// one node insertion happen here; no further content is deleted.
pub fn finish(leaf: &NodeRef, root: &NodeRef, ellipsis: &str, avoid_tags: &HashSet<String>) {
    if let Some(text) = leaf.as_text() {
        let mut text = text.borrow_mut();
        if let Some(dangling) = TRAILING_PUNCT_RE.find(text.as_str()) {
            let keep = dangling.start();
            text.truncate(keep);
        }
    }

    if ellipsis.is_empty() {
        return;
    }

    match leaf.parent() {
        Some(parent)
            if !same_node(&parent, root)
                && in_avoid_set(&parent, avoid_tags)
                && parent.parent().is_some() =>
        {
            parent.insert_after(NodeRef::new_text(ellipsis));
        }
        _ => {
            if let Some(text) = leaf.as_text() {
                text.borrow_mut().push_str(ellipsis);
            }
        }
    }
}

fn in_avoid_set(node: &NodeRef, avoid_tags: &HashSet<String>) -> bool {
    node.as_element()
        .is_some_and(|element| avoid_tags.contains(&*element.name.local))
}
