//! Index-addressed node arena.
//!
//! Nodes reference each other through [`NodeIndex`] instead of owning
//! pointers, which removes the parent/child reference cycle entirely: the
//! arena owns every node, parents hold child indices and children hold a
//! nullable parent index. Abandoned subtrees simply become unreachable and
//! are reclaimed when the arena is cleared.

use std::ops::{Index, IndexMut};

use crate::mcts::node::Node;

/// Typed index into a [`NodeArena`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeIndex(u32);

impl NodeIndex {
    fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Arena allocator for search-tree nodes.
///
/// Allocation only grows the backing vector; nodes are never removed
/// individually, so every `NodeIndex` handed out stays valid until
/// [`clear`](NodeArena::clear).
pub struct NodeArena<S> {
    nodes: Vec<Node<S>>,
}

impl<S> NodeArena<S> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
        }
    }

    pub fn alloc(&mut self, node: Node<S>) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        idx
    }

    pub fn get(&self, idx: NodeIndex) -> &Node<S> {
        &self.nodes[idx.as_usize()]
    }

    pub fn get_mut(&mut self, idx: NodeIndex) -> &mut Node<S> {
        &mut self.nodes[idx.as_usize()]
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S> Default for NodeArena<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Index<NodeIndex> for NodeArena<S> {
    type Output = Node<S>;
    fn index(&self, idx: NodeIndex) -> &Self::Output {
        self.get(idx)
    }
}

impl<S> IndexMut<NodeIndex> for NodeArena<S> {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        self.get_mut(idx)
    }
}
