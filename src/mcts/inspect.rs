//! Diagnostic tree dump.
//!
//! Renders every node with at least one visit, indented by depth. Uses an
//! explicit stack instead of recursion so deep trees cannot overflow the
//! call stack. Purely diagnostic; not part of search correctness.

use std::fmt::Write;

use crate::mcts::arena::NodeIndex;
use crate::mcts::tree::SearchTree;

/// Renders the subtree under `root` as an indented listing.
///
/// The root is always included; descendants appear only once backed up at
/// least once. Children print in insertion order, i.e. ascending action id.
pub fn dump_tree<S>(tree: &SearchTree<S>, root: NodeIndex) -> String {
    let mut out = String::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((idx, depth)) = stack.pop() {
        let node = tree.node(idx);
        let _ = writeln!(out, "{}{} {}", "  ".repeat(depth), depth, node);

        // Reverse push keeps sibling output in insertion order.
        for &child in node.children.iter().rev() {
            if tree.node(child).visits > 0 {
                stack.push((child, depth + 1));
            }
        }
    }

    out
}
