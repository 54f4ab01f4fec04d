//! Search-tree node: one visited game position.
//!
//! A node owns a snapshot of the game state together with its visit
//! statistics and the PUCT scoring operation. Links to the rest of the tree
//! go through arena indices; the node itself never owns another node.

use std::fmt;

use crate::mcts::arena::NodeIndex;

/// One visited game position.
///
/// Invariants maintained by the engine:
/// - the root has no parent and no originating action;
/// - `to_play` alternates along every parent→child edge;
/// - `children` is populated exactly once, at expansion, in ascending legal
///   action order, and never reordered or pruned afterwards.
pub struct Node<S> {
    /// Visit count `n`: number of backups that have passed through here.
    pub visits: u32,

    /// Accumulated value `w`. Overwritten once at expansion for evaluated
    /// nodes; accumulated across revisits for terminal nodes.
    pub total_value: f64,

    /// Prior probability `p` assigned by the evaluator at creation.
    pub prior: f32,

    /// Parent link; `None` only for the root.
    pub parent: Option<NodeIndex>,

    /// Action that produced this node from its parent; `None` for the root.
    pub action: Option<usize>,

    /// Owned game-state snapshot.
    pub state: S,

    /// Index of the player about to move at `state`.
    pub to_play: u8,

    /// Child indices in ascending legal-action order; empty until expanded.
    pub children: Vec<NodeIndex>,
}

impl<S> Node<S> {
    /// Creates a root node: no parent, no originating action, zero prior.
    pub fn root(state: S, to_play: u8) -> Self {
        Self {
            visits: 0,
            total_value: 0.0,
            prior: 0.0,
            parent: None,
            action: None,
            state,
            to_play,
            children: Vec::new(),
        }
    }

    /// Creates a child node produced by `action` from `parent`.
    pub fn child(state: S, to_play: u8, parent: NodeIndex, action: usize, prior: f32) -> Self {
        Self {
            visits: 0,
            total_value: 0.0,
            prior,
            parent: Some(parent),
            action: Some(action),
            state,
            to_play,
            children: Vec::new(),
        }
    }

    /// A leaf is a node with no children, either unexpanded or terminal.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Mean action-value `q = w / n`, from the perspective of the player to
    /// move here. Treated as 0 while the node is unvisited.
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_value / self.visits as f64
        }
    }

    /// PUCT exploration score of this node as a candidate child.
    ///
    /// `-q + c_puct * p * sqrt(sibling_visit_sum) / (1 + n)`
    ///
    /// `q` is expressed from this node's own to-move perspective, which is
    /// the opponent of the parent; the parent therefore maximizes `-q`.
    /// `sibling_visit_sum` is the sum of visit counts over all children of
    /// the same parent, computed fresh at each decision. This deliberately
    /// departs from PUCT variants that use the parent's own visit count.
    pub fn exploring_score(&self, sibling_visit_sum: u32, c_puct: f64) -> f64 {
        let exploration =
            c_puct * self.prior as f64 * (sibling_visit_sum as f64).sqrt() / (1.0 + self.visits as f64);
        -self.mean_value() + exploration
    }
}

impl<S> fmt::Display for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node(n={}, w={:.5}, q={:.5}, p={:.5}, a={:?}, to_play={})",
            self.visits,
            self.total_value,
            self.mean_value(),
            self.prior,
            self.action,
            self.to_play,
        )
    }
}
