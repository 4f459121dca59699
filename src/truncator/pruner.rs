//! Subtree pruner: drops everything after the breakpoint in document order.

use kuchiki::NodeRef;

use super::same_node;

/// Detach every node that follows `leaf` in document order, stopping at
/// `root`.
///
/// Later siblings of the leaf go first, then later siblings of each ancestor
/// strictly below the root. The ancestor chain itself stays in place, so
/// every element left open above the leaf keeps its closing tag and the tree
/// stays well-formed. Each sibling list is snapshotted into a `Vec` before
/// any detach; detaching while walking the live sibling links would skip
/// nodes.
pub fn prune_after(leaf: &NodeRef, root: &NodeRef) {
    let mut pruned = 0usize;
    let mut node = leaf.clone();
    loop {
        let trailing: Vec<NodeRef> = node.following_siblings().collect();
        for sibling in trailing {
            sibling.detach();
            pruned += 1;
        }
        match node.parent() {
            Some(parent) if !same_node(&parent, root) => node = parent,
            _ => break,
        }
    }
    log::debug!("pruned {pruned} nodes after the breakpoint leaf");
}
