/// The online automaton: dictionary changes, failure links and queries.
pub mod automaton;
/// Bulk construction and the input conversion trait.
pub mod builder;
/// Trait for types that can serve as trie edge labels.
pub mod char_trait;
/// Trie node and children module containing the core graph data structures.
pub mod children;
/// Error types.
pub mod error;
/// Index-addressed node storage.
pub(crate) mod node_arena;

pub use automaton::{MatchSet, PatternAutomaton};
pub use builder::{build_automaton, build_automaton_from_file, IntoWord};
pub use char_trait::PatternChar;
pub use children::TrieNode;
pub use error::{AutomatonError, Result};
pub use node_arena::{NodeId, ROOT};
