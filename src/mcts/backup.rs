//! Backup: leaf-to-root value propagation.
//!
//! The value propagated upward is the leaf's *total accumulated* `w` at the
//! time of this backup, not a per-visit delta. For revisited terminal leaves
//! that total already includes all prior visits' rewards; propagating it
//! unchanged keeps the leaf's `q` a correct running mean. Because `to_play`
//! alternates every ply, the sign flips at every other ancestor, which
//! implements minimax-style propagation across alternating perspectives.

use crate::mcts::arena::NodeIndex;
use crate::mcts::tree::SearchTree;

/// Propagates the leaf's value up to the root, incrementing visit counts
/// along the way.
pub fn backup<S>(tree: &mut SearchTree<S>, leaf: NodeIndex) {
    let leaf_to_play = tree.node(leaf).to_play;
    let v = tree.node(leaf).total_value;

    tree.node_mut(leaf).visits += 1;

    let mut current = tree.node(leaf).parent;
    while let Some(idx) = current {
        let node = tree.node_mut(idx);
        node.visits += 1;
        if node.to_play == leaf_to_play {
            node.total_value += v;
        } else {
            node.total_value -= v;
        }
        current = node.parent;
    }
}
