//! Flattens the document tree into text leaves in reading order.
//!
//! Text is scanned per leaf. A term split across two leaves ("hel" + "lo",
//! e.g. at a formatting boundary) is not found; joining leaves would lose the
//! per-leaf offsets that selections and edits are addressed by.

use crate::kernel::services::ports::{LeafRef, Node, StructuralPath};

/// Pre-order, left-to-right walk. Every leaf is emitted exactly once,
/// empty ones included.
pub fn walk(root: &Node) -> Vec<LeafRef> {
    let mut leaves = Vec::new();
    let mut stack = vec![(root, StructuralPath::root())];

    while let Some((node, path)) = stack.pop() {
        match node {
            Node::Leaf { text, .. } => leaves.push(LeafRef::new(path, text.as_str())),
            Node::Block { children } => {
                for (ix, child) in children.iter().enumerate().rev() {
                    stack.push((child, path.child(ix)));
                }
            }
        }
    }

    leaves
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/walker.rs"]
mod tests;
