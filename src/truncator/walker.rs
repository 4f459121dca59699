//! Counting walker: locates the breakpoint leaf.

use kuchiki::NodeRef;
use kuchiki::iter::NodeIterator;

use super::TrimUnit;
use crate::text;

/// The text node at which the cumulative count first reaches the limit,
/// together with the cut offset inside it (in Unicode scalar values).
pub struct Breakpoint {
    pub leaf: NodeRef,
    pub offset: usize,
}

/// Locate the breakpoint leaf by pre-order depth-first traversal.
///
/// Element nodes are transparent; only text leaves contribute to the running
/// count. The breakpoint is the first leaf whose inclusion makes the
/// cumulative count meet or exceed `limit`. In character mode the offset is
/// `limit - count_before`; in word mode it is the character position right
/// after the last word that still fits the budget.
///
/// Returns `None` when the whole tree fits within `limit` (callers normally
/// guard on total length first and skip the walk entirely).
pub fn locate(root: &NodeRef, limit: usize, unit: TrimUnit) -> Option<Breakpoint> {
    let mut seen = 0usize;
    for leaf in root.descendants().text_nodes() {
        let text = leaf.borrow();
        let units_here = match unit {
            TrimUnit::Chars => text.chars().count(),
            TrimUnit::Words => text.split_whitespace().count(),
        };
        if seen + units_here >= limit {
            let remaining = limit - seen;
            let offset = match unit {
                TrimUnit::Chars => remaining,
                TrimUnit::Words => text::word_end_offset(&text, remaining),
            };
            log::debug!(
                "breakpoint leaf found after {seen} {unit:?} at offset {offset} of {len}-char leaf",
                len = text.chars().count()
            );
            return Some(Breakpoint {
                leaf: leaf.as_node().clone(),
                offset,
            });
        }
        seen += units_here;
    }
    None
}
