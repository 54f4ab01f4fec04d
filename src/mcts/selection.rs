//! Selection: PUCT descent from a node to a leaf.
//!
//! At each step the child maximizing the exploring score is chosen, with the
//! sibling visit sum recomputed fresh at every decision. Ties break towards
//! the first maximal child in insertion order, so descent is deterministic
//! given the tree's current statistics.

use crate::mcts::arena::NodeIndex;
use crate::mcts::tree::SearchTree;
use crate::{Result, SearchError};

/// Child of `parent` maximizing the exploring score, or `None` when
/// `parent` has no children.
pub fn best_child_to_explore<S>(
    tree: &SearchTree<S>,
    parent: NodeIndex,
    c_puct: f64,
) -> Option<NodeIndex> {
    let children = &tree.node(parent).children;
    if children.is_empty() {
        return None;
    }

    let sibling_visit_sum = tree.sibling_visit_sum(parent);

    let mut best = children[0];
    let mut best_score = tree.node(best).exploring_score(sibling_visit_sum, c_puct);
    for &child in &children[1..] {
        let score = tree.node(child).exploring_score(sibling_visit_sum, c_puct);
        // Strict comparison keeps the first maximal child on ties.
        if score > best_score {
            best = child;
            best_score = score;
        }
    }
    Some(best)
}

/// Fallible wrapper for callers that require an expanded node.
pub fn try_best_child_to_explore<S>(
    tree: &SearchTree<S>,
    parent: NodeIndex,
    c_puct: f64,
) -> Result<NodeIndex> {
    best_child_to_explore(tree, parent, c_puct).ok_or(SearchError::UnexpandedLeaf)
}

/// Descends from `node` to a leaf by repeated best-child selection.
///
/// The returned leaf is either unexpanded or a true terminal state that is
/// never expanded. Termination is guaranteed because the tree is acyclic
/// and finite.
pub fn select<S>(tree: &SearchTree<S>, mut node: NodeIndex, c_puct: f64) -> NodeIndex {
    while let Some(child) = best_child_to_explore(tree, node, c_puct) {
        node = child;
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcts::node::Node;
    use assert_matches::assert_matches;

    fn tree_with_priors(priors: &[f32]) -> SearchTree<()> {
        let mut tree = SearchTree::new((), 0);
        let root = tree.root();
        for (action, &p) in priors.iter().enumerate() {
            let child = tree.arena_mut().alloc(Node::child((), 1, root, action, p));
            tree.node_mut(root).children.push(child);
        }
        tree
    }

    #[test]
    fn leaf_has_no_best_child() {
        let tree: SearchTree<()> = SearchTree::new((), 0);
        assert_eq!(best_child_to_explore(&tree, tree.root(), 1.0), None);
        assert_matches!(
            try_best_child_to_explore(&tree, tree.root(), 1.0),
            Err(SearchError::UnexpandedLeaf)
        );
    }

    #[test]
    fn highest_prior_wins_among_unvisited() {
        let mut tree = tree_with_priors(&[0.1, 0.6, 0.3]);
        let root = tree.root();
        // With zero sibling visits every score is 0; seed one visit so the
        // exploration term differentiates the children.
        let first = tree.node(root).children[0];
        tree.node_mut(first).visits = 1;

        let best = best_child_to_explore(&tree, root, 1.0).unwrap();
        assert_eq!(tree.node(best).action, Some(1));
    }

    #[test]
    fn ties_break_towards_first_child() {
        let tree = tree_with_priors(&[0.5, 0.5]);
        let best = best_child_to_explore(&tree, tree.root(), 1.0).unwrap();
        assert_eq!(tree.node(best).action, Some(0));
    }

    #[test]
    fn lower_visit_count_preferred_at_equal_prior_and_value() {
        let mut tree = tree_with_priors(&[0.5, 0.5]);
        let root = tree.root();
        let children = tree.node(root).children.clone();
        tree.node_mut(children[0]).visits = 8;
        tree.node_mut(children[0]).total_value = 4.0;
        tree.node_mut(children[1]).visits = 2;
        tree.node_mut(children[1]).total_value = 1.0;

        let best = best_child_to_explore(&tree, root, 1.0).unwrap();
        assert_eq!(best, children[1]);
    }

    #[test]
    fn select_descends_to_deepest_leaf() {
        let mut tree = tree_with_priors(&[1.0]);
        let root = tree.root();
        let mid = tree.node(root).children[0];
        let leaf = tree.arena_mut().alloc(Node::child((), 0, mid, 0, 1.0));
        tree.node_mut(mid).children.push(leaf);

        assert_eq!(select(&tree, root, 1.0), leaf);
        assert_eq!(select(&tree, leaf, 1.0), leaf);
    }
}
