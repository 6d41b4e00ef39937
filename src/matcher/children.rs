use hashbrown::HashSet;

use super::char_trait::PatternChar;
use super::node_arena::NodeId;

/// A compact representation of the children of a TrieNode that doesn't allocate until
/// there are at least three children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children<C: PatternChar> {
    /// No children.
    None,
    /// Exactly one child (letter, node).
    One((C, NodeId)),
    /// Exactly two children (letter1, node1, letter2, node2).
    Two((C, NodeId, C, NodeId)),
    /// Three or more children stored in a vector, in insertion order.
    Many(Vec<(C, NodeId)>),
}

impl<C: PatternChar> Children<C> {
    /// Gets the child at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(C, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some(*child),
                _ => None,
            },
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn find(&self, letter: C) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((ch, node)) => (*ch == letter).then_some(*node),
            Children::Two((c1, n1, c2, n2)) => {
                if letter == *c1 {
                    Some(*n1)
                } else if letter == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) => {
                // Unrolled by 2; a scalar loop over small fan-outs is slower.
                let chunks = children.chunks_exact(2);
                let remainder = chunks.remainder();
                for chunk in chunks {
                    if chunk[0].0 == letter {
                        return Some(chunk[0].1);
                    }
                    if chunk[1].0 == letter {
                        return Some(chunk[1].1);
                    }
                }
                remainder
                    .iter()
                    .find(|&&(ch, _)| ch == letter)
                    .map(|&(_, node)| node)
            }
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }

    /// True if there are no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Adds an edge. The letter must not already be present.
    pub(crate) fn insert(&mut self, letter: C, node: NodeId) {
        debug_assert!(self.find(letter).is_none(), "insert: letter already exists");
        let c = (letter, node);
        match self {
            Children::None => *self = Children::One(c),
            Children::One((c1, n1)) => *self = Children::Two((*c1, *n1, c.0, c.1)),
            Children::Two((c1, n1, c2, n2)) => {
                *self = Children::Many(vec![(*c1, *n1), (*c2, *n2), c])
            }
            Children::Many(children) => children.push(c),
        }
    }
}

/// An iterator over the children of a TrieNode.
#[derive(Clone)]
pub struct ChildIter<'a, C: PatternChar> {
    children: &'a Children<C>,
    index: usize,
}

impl<C: PatternChar> Iterator for ChildIter<'_, C> {
    type Item = (C, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next_child = self.children.get(self.index)?;
        self.index += 1;
        Some(next_child)
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: PatternChar> ExactSizeIterator for ChildIter<'_, C> {}

/// A trie vertex. The root is the only node without an incoming edge.
///
/// `failure_link` and `word` are memoized lazily by the owning
/// [`PatternAutomaton`](super::automaton::PatternAutomaton); `dependents` is
/// the inverse of `failure_link` restricted to memoized links.
#[derive(Clone, Debug)]
pub struct TrieNode<C: PatternChar> {
    edge: Option<(NodeId, C)>,
    children: Children<C>,
    terminal: bool,
    pub(crate) failure_link: Option<NodeId>,
    pub(crate) word: Option<C::Word>,
    pub(crate) dependents: HashSet<NodeId>,
}

impl<C: PatternChar> TrieNode<C> {
    /// Creates the root node: it fails to itself and spells the empty word.
    pub(crate) fn root(id: NodeId) -> Self {
        TrieNode {
            edge: None,
            children: Children::None,
            terminal: false,
            failure_link: Some(id),
            word: Some(C::Word::default()),
            dependents: HashSet::new(),
        }
    }

    /// Creates a non-terminal node reached from `parent` over `label`.
    pub(crate) fn new(parent: NodeId, label: C) -> Self {
        TrieNode {
            edge: Some((parent, label)),
            children: Children::None,
            terminal: false,
            failure_link: None,
            word: None,
            dependents: HashSet::new(),
        }
    }

    /// The label on the edge leading to this node; `None` for the root.
    #[inline]
    pub fn label(&self) -> Option<C> {
        self.edge.map(|(_, label)| label)
    }

    /// The parent node; `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.edge.map(|(parent, _)| parent)
    }

    #[inline]
    pub(crate) fn edge(&self) -> Option<(NodeId, C)> {
        self.edge
    }

    /// Returns the child that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: C) -> Option<NodeId> {
        self.children.find(letter)
    }

    /// True if this node ends a currently active pattern.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    /// Returns an iterator over all children of this node, as
    /// `(label, child id)` pairs.
    ///
    /// ```
    /// use libaho::PatternAutomaton;
    ///
    /// let mut automaton = PatternAutomaton::new();
    /// automaton.add("BAKE").unwrap();
    /// automaton.add("CAKE").unwrap();
    ///
    /// let mut labels: Vec<char> = automaton.root().children().map(|(c, _)| c).collect();
    /// labels.sort();
    /// assert_eq!(labels, ['B', 'C']);
    ///
    /// let (_, b) = automaton.root().children().find(|&(c, _)| c == 'B').unwrap();
    /// assert_eq!(automaton.node(b).unwrap().child_count(), 1);
    /// ```
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        ChildIter {
            children: &self.children,
            index: 0,
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Adds an outgoing edge.
    pub(crate) fn insert(&mut self, letter: C, child: NodeId) {
        self.children.insert(letter, child);
    }
}
