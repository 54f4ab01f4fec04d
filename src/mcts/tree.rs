//! Lifecycle manager for the search tree.
//!
//! Bundles the node arena with the current root index. One root is created
//! per search invocation from the current game state, or reused from a
//! retained subtree of a prior search via [`SearchTree::advance_root`].

use crate::mcts::arena::{NodeArena, NodeIndex};
use crate::mcts::node::Node;

/// Arena-backed search tree with a movable root.
///
/// Abandoned nodes (old roots, unplayed siblings) stay in the arena until
/// [`reinit`](SearchTree::reinit); there is no pruning.
pub struct SearchTree<S> {
    arena: NodeArena<S>,
    root: NodeIndex,
}

impl<S> SearchTree<S> {
    /// Creates a tree whose root holds the given state snapshot.
    pub fn new(state: S, to_play: u8) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::root(state, to_play));
        Self { arena, root }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn arena(&self) -> &NodeArena<S> {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut NodeArena<S> {
        &mut self.arena
    }

    pub fn node(&self, idx: NodeIndex) -> &Node<S> {
        &self.arena[idx]
    }

    pub fn node_mut(&mut self, idx: NodeIndex) -> &mut Node<S> {
        &mut self.arena[idx]
    }

    /// Sum of visit counts over the children of `parent`, computed fresh.
    /// This is the quantity inside the exploration bonus's square root.
    pub fn sibling_visit_sum(&self, parent: NodeIndex) -> u32 {
        self.arena[parent]
            .children
            .iter()
            .map(|&child| self.arena[child].visits)
            .sum()
    }

    /// Moves the root to the child reached by `action`, retaining that
    /// child's subtree for the next search.
    ///
    /// Returns `false` when no such child exists (the action was never
    /// expanded); the caller should [`reinit`](SearchTree::reinit) from the
    /// externally advanced game state instead.
    pub fn advance_root(&mut self, action: usize) -> bool {
        let child = self.arena[self.root]
            .children
            .iter()
            .copied()
            .find(|&c| self.arena[c].action == Some(action));
        match child {
            Some(idx) => {
                self.root = idx;
                true
            }
            None => false,
        }
    }

    /// Clears the arena and creates a fresh root from `state`.
    pub fn reinit(&mut self, state: S, to_play: u8) {
        self.arena.clear();
        self.root = self.arena.alloc(Node::root(state, to_play));
    }
}
