//! # libaho
//!
//! An online [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! automaton: a multi-pattern matcher whose dictionary can grow and shrink
//! after construction.
//!
//! Patterns live in a trie augmented with failure links. Instead of a global
//! breadth-first pass after every edit, failure links are resolved lazily on
//! first use and memoized; inserting a pattern repairs exactly the memoized
//! links its new edges make stale, and deleting a pattern only clears a
//! terminal flag.
//!
//! ## Quick Start
//!
//! ```
//! use libaho::PatternAutomaton;
//!
//! let mut automaton = PatternAutomaton::new();
//! for word in ["he", "she", "his", "hers"] {
//!     automaton.add(word).unwrap();
//! }
//!
//! let matches = automaton.query("ahishers");
//! for word in ["he", "she", "his", "hers"] {
//!     assert!(matches.contains(word));
//! }
//!
//! automaton.delete("his");
//! assert!(!automaton.query("ahishers").contains("his"));
//! ```
//!
//! ## Generic Usage
//!
//! The automaton is generic over the edge label type. `char` labels report
//! matches as `String`s; integer labels report `Vec`s:
//!
//! ```
//! use libaho::PatternAutomaton;
//!
//! let mut automaton = PatternAutomaton::<u8>::new();
//! automaton.add([1, 2, 3]).unwrap();
//! automaton.add([2, 3]).unwrap();
//!
//! let matches = automaton.query([9, 1, 2, 3]);
//! assert!(matches.contains(&vec![1, 2, 3]));
//! assert!(matches.contains(&vec![2, 3]));
//! ```
//!
//! ## Logging
//!
//! Dictionary changes are reported as `tracing` events at `debug` level and
//! failure-link repairs at `trace` level. Install any `tracing` subscriber to
//! see them.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Online Aho-Corasick automaton: trie, failure links, builder and errors.
pub mod matcher;

pub use matcher::{AutomatonError, IntoWord, MatchSet, PatternAutomaton, PatternChar};
