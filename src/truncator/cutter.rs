//! Leaf truncator: cuts the breakpoint leaf at the computed offset.

use kuchiki::NodeRef;

use crate::text;

/// Cut `leaf`'s text down to its first `offset` Unicode scalar values.
///
/// The offset is converted to a byte position at a character boundary, so the
/// cut can never leave a partially-encoded multi-byte sequence behind. Nodes
/// other than the leaf are not touched at this stage; offsets past the end of
/// the text leave it unchanged.
pub fn truncate_leaf(leaf: &NodeRef, offset: usize) {
    if let Some(text) = leaf.as_text() {
        let mut text = text.borrow_mut();
        let cut = text::char_boundary(&text, offset);
        text.truncate(cut);
    }
}
