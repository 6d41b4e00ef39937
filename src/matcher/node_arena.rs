//! Index-addressed node storage for the pattern trie.
//!
//! Nodes refer to each other by [`NodeId`] (parent, children, failure links),
//! so the table never hands out references that outlive a mutation.

use std::ops::{Index, IndexMut};

use super::char_trait::PatternChar;
use super::children::TrieNode;

/// Identifier of a trie node. Identifiers are assigned in allocation order
/// and never reused, not even by a rebuild.
pub type NodeId = usize;

/// Identifier of the root node.
pub const ROOT: NodeId = 0;

/// An append-only table of trie nodes. The root is allocated on creation.
///
/// Slot 0 always holds the root; slot `k > 0` holds node `offset + k`. An
/// arena that replaces another one starts its ids after the old arena's last
/// id, so ids handed out before the replacement resolve to nothing.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<C: PatternChar> {
    nodes: Vec<TrieNode<C>>,
    offset: usize,
}

impl<C: PatternChar> NodeArena<C> {
    /// Creates an arena holding only the root.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(TrieNode::root(ROOT));
        NodeArena { nodes, offset: 0 }
    }

    /// Creates an arena holding only the root whose first allocated id is
    /// `previous`'s next id.
    pub fn succeeding(previous: &NodeArena<C>) -> Self {
        let mut arena = Self::with_capacity(0);
        arena.offset = previous.next_id() - 1;
        arena
    }

    /// The id the next allocation will receive.
    pub fn next_id(&self) -> NodeId {
        self.offset + self.nodes.len()
    }

    fn slot(&self, id: NodeId) -> Option<usize> {
        if id == ROOT {
            return Some(0);
        }
        id.checked_sub(self.offset)
            .filter(|&slot| slot > 0 && slot < self.nodes.len())
    }

    /// Stores a node and returns its identifier.
    pub fn alloc(&mut self, node: TrieNode<C>) -> NodeId {
        let id = self.next_id();
        self.nodes.push(node);
        id
    }

    /// Returns the node with the given identifier, if it is live.
    pub fn get(&self, id: NodeId) -> Option<&TrieNode<C>> {
        self.slot(id).map(|slot| &self.nodes[slot])
    }

    /// Returns the ids of all live nodes, root first, in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        std::iter::once(ROOT).chain(self.offset + 1..self.next_id())
    }

    /// Returns the number of nodes allocated in this arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<C: PatternChar> Index<NodeId> for NodeArena<C> {
    type Output = TrieNode<C>;

    #[inline]
    fn index(&self, id: NodeId) -> &TrieNode<C> {
        let slot = self.slot(id).expect("node id is not live in this arena");
        &self.nodes[slot]
    }
}

impl<C: PatternChar> IndexMut<NodeId> for NodeArena<C> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut TrieNode<C> {
        let slot = self.slot(id).expect("node id is not live in this arena");
        &mut self.nodes[slot]
    }
}
