use hashbrown::HashSet;
use smallvec::{smallvec, SmallVec};
use tracing::{debug, trace};

use super::builder::IntoWord;
use super::char_trait::PatternChar;
use super::children::TrieNode;
use super::error::{AutomatonError, Result};
use super::node_arena::{NodeArena, NodeId, ROOT};

/// The set of dictionary words found in a haystack.
pub type MatchSet<C> = HashSet<<C as PatternChar>::Word>;

/// An Aho-Corasick automaton whose dictionary can change after construction.
///
/// Patterns are kept in a trie. Failure links and the word each node spells
/// are computed on first use and memoized; adding a pattern repairs exactly
/// the memoized failure links the new trie edges make stale. Deleting a
/// pattern only clears its terminal flag, so no links ever go stale on
/// deletion and the trie never shrinks until [`rebuild`](Self::rebuild).
///
/// Queries memoize too, which is why [`query`](Self::query) takes `&mut self`.
///
/// # Examples
///
/// ```
/// use libaho::PatternAutomaton;
///
/// let mut automaton = PatternAutomaton::new();
/// for word in ["he", "she", "his", "hers"] {
///     automaton.add(word).unwrap();
/// }
///
/// let matches = automaton.query("ahishers");
/// assert_eq!(matches.len(), 4);
///
/// automaton.delete("she");
/// assert!(!automaton.query("ahishers").contains("she"));
/// ```
#[derive(Clone)]
pub struct PatternAutomaton<C: PatternChar = char> {
    nodes: NodeArena<C>,
    /// Words currently in the dictionary.
    active: HashSet<C::Word>,
    /// Deleted words whose nodes are still in the trie.
    retired: HashSet<C::Word>,
}

impl<C: PatternChar> Default for PatternAutomaton<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PatternChar> PatternAutomaton<C> {
    /// Creates an automaton with an empty dictionary.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty automaton with room for `nodes` trie nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        PatternAutomaton {
            nodes: NodeArena::with_capacity(nodes),
            active: HashSet::new(),
            retired: HashSet::new(),
        }
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &TrieNode<C> {
        &self.nodes[ROOT]
    }

    /// Returns the node with the given identifier, if it exists. Ids of nodes
    /// dropped by [`rebuild`](Self::rebuild) return `None`.
    pub fn node(&self, id: NodeId) -> Option<&TrieNode<C>> {
        self.nodes.get(id)
    }

    /// Returns the number of trie nodes, root included. Never decreases
    /// except through [`rebuild`](Self::rebuild).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of active patterns.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// True if no pattern is active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns an iterator over the active patterns, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &C::Word> + '_ {
        self.active.iter()
    }

    /// Returns `true` if the given word is an active pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use libaho::PatternAutomaton;
    ///
    /// let mut automaton = PatternAutomaton::new();
    /// automaton.add("CAKE").unwrap();
    /// assert!(automaton.contains("CAKE"));
    /// assert!(!automaton.contains("CAK"));
    /// ```
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        self.active.contains(&C::word_from(&word))
    }

    /// Returns the number of deleted patterns whose nodes are still in the trie.
    pub fn retired_count(&self) -> usize {
        self.retired.len()
    }

    /// Returns `true` if the word was deleted and not added again since.
    pub fn is_retired(&self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        self.retired.contains(&C::word_from(&word))
    }

    /// Adds a pattern to the dictionary.
    ///
    /// Returns `Ok(true)` if the pattern was added and `Ok(false)` if it was
    /// already active.
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError::EmptyPattern`] for an empty word; the
    /// automaton is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use libaho::{AutomatonError, PatternAutomaton};
    ///
    /// let mut automaton = PatternAutomaton::new();
    /// assert_eq!(automaton.add("FAKE"), Ok(true));
    /// assert_eq!(automaton.add("FAKE"), Ok(false)); // already present
    /// assert_eq!(automaton.add(""), Err(AutomatonError::EmptyPattern));
    /// ```
    pub fn add(&mut self, word: impl IntoWord<C>) -> Result<bool> {
        let word = word.collect_word();
        if word.is_empty() {
            return Err(AutomatonError::EmptyPattern);
        }
        let key = C::word_from(&word);
        if self.active.contains(&key) {
            return Ok(false);
        }
        self.retired.remove(&key);

        let terminal = self.insert_path(&word);
        debug!(word = ?key, node = terminal, "added pattern");
        self.active.insert(key);
        Ok(true)
    }

    /// Removes a pattern from the dictionary.
    ///
    /// Returns `true` if the pattern was removed, `false` if it was not
    /// active. The pattern's nodes stay in the trie.
    ///
    /// # Panics
    ///
    /// Panics if an active pattern has no complete path in the trie, which
    /// means the dictionary and the trie have diverged.
    ///
    /// # Examples
    ///
    /// ```
    /// use libaho::PatternAutomaton;
    ///
    /// let mut automaton = PatternAutomaton::new();
    /// automaton.add("BAKE").unwrap();
    /// assert!(automaton.delete("BAKE"));
    /// assert!(!automaton.delete("BAKE")); // already removed
    /// assert!(automaton.query("BAKER").is_empty());
    /// ```
    pub fn delete(&mut self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        let key = C::word_from(&word);
        if !self.active.remove(&key) {
            return false;
        }

        let terminal = word
            .iter()
            .try_fold(ROOT, |node, &ch| self.nodes[node].get(ch))
            .unwrap_or_else(|| panic!("active pattern {key:?} has no complete trie path"));
        self.nodes[terminal].set_terminal(false);
        debug!(word = ?key, node = terminal, "deleted pattern");
        self.retired.insert(key);
        true
    }

    /// Returns every active pattern that occurs in `haystack`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libaho::PatternAutomaton;
    ///
    /// let mut automaton = PatternAutomaton::new();
    /// automaton.add("ab").unwrap();
    /// automaton.add("abc").unwrap();
    ///
    /// let matches = automaton.query("xabcx");
    /// assert!(matches.contains("ab") && matches.contains("abc"));
    /// assert!(automaton.query("").is_empty());
    /// ```
    pub fn query(&mut self, haystack: impl IntoWord<C>) -> MatchSet<C> {
        let mut matches = MatchSet::<C>::new();
        if self.active.is_empty() {
            return matches;
        }
        let mut state = ROOT;
        for ch in haystack.collect_word() {
            state = self.transition(state, ch);
            self.collect_matches(state, &mut matches);
        }
        matches
    }

    /// Rebuilds the trie from the active patterns only.
    ///
    /// Drops the nodes that deleted patterns left behind, forgets the retired
    /// patterns and discards every memoized link. Surviving nodes get fresh
    /// ids after every id handed out so far; old ids are never reused.
    /// Never called implicitly.
    pub fn rebuild(&mut self) {
        let mut fresh = PatternAutomaton {
            nodes: NodeArena::succeeding(&self.nodes),
            active: HashSet::new(),
            retired: HashSet::new(),
        };
        for node in self.nodes.ids() {
            if self.nodes[node].is_terminal() {
                fresh.insert_path(&self.labels(node));
            }
        }
        fresh.active = std::mem::take(&mut self.active);
        debug!(
            before = self.nodes.len(),
            after = fresh.nodes.len(),
            retired = self.retired.len(),
            "rebuilt trie"
        );
        *self = fresh;
    }

    /// Walks `word` from the root, creating missing nodes, and marks the
    /// last node terminal.
    fn insert_path(&mut self, word: &[C]) -> NodeId {
        let mut current = ROOT;
        for &ch in word {
            current = match self.nodes[current].get(ch) {
                Some(child) => child,
                None => self.attach_child(current, ch),
            };
        }
        self.nodes[current].set_terminal(true);
        current
    }

    /// The labels on the path from the root to `node`.
    fn labels(&self, node: NodeId) -> SmallVec<[C; 32]> {
        let mut labels = SmallVec::new();
        let mut cursor = node;
        while let Some((parent, label)) = self.nodes[cursor].edge() {
            labels.push(label);
            cursor = parent;
        }
        labels.reverse();
        labels
    }

    fn attach_child(&mut self, parent: NodeId, label: C) -> NodeId {
        let child = self.nodes.alloc(TrieNode::new(parent, label));
        self.nodes[parent].insert(label, child);
        self.relink_dependents(parent, label, child);
        child
    }

    /// Repairs memoized failure links after the edge `parent --label--> child`
    /// was created.
    ///
    /// A node `x` whose failure chain reaches `parent` through nodes without a
    /// `label` edge now has `child` as the longest suffix match for `x + label`.
    /// The inverse failure tree under `parent` is walked to find those `x`;
    /// the walk stops at nodes that have their own `label` edge, whose
    /// subtrees already fail to something longer than `child`.
    ///
    /// `child` is resolved before anything is pointed at it, so every
    /// memoized chain stays memoized all the way to the root and later
    /// repairs can reach the nodes hanging below it.
    fn relink_dependents(&mut self, parent: NodeId, label: C, child: NodeId) {
        let mut stack: SmallVec<[NodeId; 16]> =
            self.nodes[parent].dependents.iter().copied().collect();
        let mut stale: SmallVec<[NodeId; 16]> = SmallVec::new();
        while let Some(node) = stack.pop() {
            match self.nodes[node].get(label) {
                Some(next) => {
                    if self.nodes[next].failure_link.is_some() {
                        stale.push(next);
                    }
                }
                None => stack.extend(self.nodes[node].dependents.iter().copied()),
            }
        }
        if stale.is_empty() {
            return;
        }
        self.resolve_failure_link(child);
        for node in stale {
            trace!(node, from = ?self.nodes[node].failure_link, to = child, "relinked failure link");
            self.set_failure_link(node, child);
        }
    }

    /// Memoizes `node`'s failure link and keeps `dependents` its inverse.
    fn set_failure_link(&mut self, node: NodeId, target: NodeId) {
        if let Some(previous) = self.nodes[node].failure_link.replace(target) {
            self.nodes[previous].dependents.remove(&node);
        }
        self.nodes[target].dependents.insert(node);
    }

    /// Returns the node spelling the longest proper suffix of `node`'s word
    /// that is also a path from the root.
    ///
    /// Unresolved ancestors are resolved first, shallowest to deepest, so the
    /// only nested calls are the ones `transition` makes on strictly
    /// shallower nodes.
    fn resolve_failure_link(&mut self, node: NodeId) -> NodeId {
        if let Some(link) = self.nodes[node].failure_link {
            return link;
        }

        let mut pending: SmallVec<[NodeId; 32]> = smallvec![node];
        let mut cursor = node;
        while let Some(parent) = self.nodes[cursor].parent() {
            if self.nodes[parent].failure_link.is_some() {
                break;
            }
            pending.push(parent);
            cursor = parent;
        }

        let mut link = ROOT;
        for &id in pending.iter().rev() {
            let (parent, label) = self.nodes[id]
                .edge()
                .expect("only the root lacks an incoming edge, and it is always resolved");
            link = if parent == ROOT {
                ROOT
            } else {
                let parent_link = self.nodes[parent]
                    .failure_link
                    .expect("ancestors are resolved before their descendants");
                self.transition(parent_link, label)
            };
            self.set_failure_link(id, link);
        }
        link
    }

    /// Goto with failure fallback: the state reached from `node` on `label`.
    fn transition(&mut self, mut node: NodeId, label: C) -> NodeId {
        loop {
            if let Some(child) = self.nodes[node].get(label) {
                return child;
            }
            if node == ROOT {
                return ROOT;
            }
            node = self.resolve_failure_link(node);
        }
    }

    /// Returns the word `node` spells, memoizing it on `node` only.
    fn resolve_word(&mut self, node: NodeId) -> &C::Word {
        if self.nodes[node].word.is_none() {
            let mut labels: SmallVec<[C; 32]> = SmallVec::new();
            let mut cursor = node;
            let base = loop {
                if let Some(word) = &self.nodes[cursor].word {
                    break word;
                }
                let (parent, label) = self.nodes[cursor]
                    .edge()
                    .expect("the root always spells the empty word");
                labels.push(label);
                cursor = parent;
            };
            let mut word = base.clone();
            for &label in labels.iter().rev() {
                label.push_to(&mut word);
            }
            self.nodes[node].word = Some(word);
        }
        self.nodes[node]
            .word
            .as_ref()
            .expect("word was memoized above")
    }

    /// Adds every active word ending at `node`: the node's own word if it is
    /// terminal, then each terminal node on its failure chain.
    fn collect_matches(&mut self, node: NodeId, matches: &mut MatchSet<C>) {
        let mut current = node;
        while current != ROOT {
            if self.nodes[current].is_terminal() {
                let word = self.resolve_word(current);
                if !matches.contains(word) {
                    matches.insert(word.clone());
                }
            }
            current = self.resolve_failure_link(current);
        }
    }
}

impl<C: PatternChar> std::fmt::Debug for PatternAutomaton<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternAutomaton")
            .field("patterns", &self.active.len())
            .field("retired", &self.retired.len())
            .field("node_count", &self.node_count())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn set(words: &[&str]) -> MatchSet<char> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn automaton(words: &[&str]) -> PatternAutomaton {
        let mut automaton = PatternAutomaton::new();
        for word in words {
            automaton.add(word).unwrap();
        }
        automaton
    }

    fn node_at(automaton: &PatternAutomaton, word: &str) -> NodeId {
        word.chars()
            .try_fold(ROOT, |node, ch| automaton.nodes[node].get(ch))
            .unwrap()
    }

    #[test]
    fn textbook_example() {
        let mut automaton = automaton(&["he", "she", "his", "hers"]);
        assert_eq!(
            automaton.query("ahishers"),
            set(&["his", "she", "he", "hers"])
        );
    }

    #[test]
    fn textbook_failure_links() {
        let mut automaton = automaton(&["he", "she", "his", "hers"]);
        let expected = [
            ("h", ""),
            ("he", ""),
            ("her", ""),
            ("hers", "s"),
            ("hi", ""),
            ("his", "s"),
            ("s", ""),
            ("sh", "h"),
            ("she", "he"),
        ];
        for (from, to) in expected {
            let node = node_at(&automaton, from);
            let link = automaton.resolve_failure_link(node);
            assert_eq!(link, node_at(&automaton, to), "{from}");
        }
        assert_eq!(automaton.resolve_failure_link(ROOT), ROOT);
    }

    #[test]
    fn prefix_and_extension_both_match() {
        let mut automaton = automaton(&["ab", "abc"]);
        assert_eq!(automaton.query("xabcx"), set(&["ab", "abc"]));
    }

    #[test]
    fn deleted_word_no_longer_matches() {
        let mut automaton = automaton(&["cat"]);
        automaton.delete("cat");
        assert!(automaton.query("concatenate").is_empty());
        assert!(automaton.is_empty());
    }

    #[test]
    fn empty_haystack_matches_nothing() {
        let mut automaton = automaton(&["a", "b"]);
        assert!(automaton.query("").is_empty());
    }

    #[test]
    fn empty_dictionary_matches_nothing() {
        let mut automaton = PatternAutomaton::<char>::new();
        assert!(automaton.query("anything").is_empty());
    }

    #[test]
    fn haystack_without_patterns_matches_nothing() {
        let mut automaton = automaton(&["needle"]);
        assert!(automaton.query("haystack").is_empty());
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let mut automaton = automaton(&["he"]);
        let nodes = automaton.node_count();
        assert_eq!(automaton.add(""), Err(AutomatonError::EmptyPattern));
        assert_eq!(automaton.len(), 1);
        assert_eq!(automaton.node_count(), nodes);
    }

    #[test]
    fn repeated_matches_are_reported_once() {
        let mut automaton = automaton(&["ab"]);
        let matches = automaton.query("ababab");
        assert_eq!(matches, set(&["ab"]));
    }

    #[test]
    fn add_is_idempotent() {
        let mut automaton = automaton(&["hers"]);
        let nodes = automaton.node_count();
        assert_eq!(automaton.add("hers"), Ok(false));
        assert_eq!(automaton.node_count(), nodes);
        assert_eq!(automaton.len(), 1);
        assert_eq!(automaton.query("ushers"), set(&["hers"]));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut automaton = automaton(&["he", "she"]);
        assert!(automaton.delete("she"));
        assert!(!automaton.delete("she"));
        assert_eq!(automaton.retired_count(), 1);
        assert_eq!(automaton.query("she"), set(&["he"]));
    }

    #[test]
    fn delete_of_absent_word_is_noop() {
        let mut automaton = automaton(&["CART"]);
        assert!(!automaton.delete("CAR"));
        assert!(!automaton.delete("TRUCK"));
        assert_eq!(automaton.retired_count(), 0);
        assert_eq!(automaton.query("CART"), set(&["CART"]));
    }

    #[test]
    fn delete_keeps_nodes_and_longer_words() {
        let mut automaton = automaton(&["CAR", "CART"]);
        let nodes = automaton.node_count();
        automaton.delete("CAR");
        assert_eq!(automaton.node_count(), nodes);
        assert!(!automaton.root().is_terminal());
        assert_eq!(automaton.query("CARTS"), set(&["CART"]));
        assert!(automaton.contains("CART"));
        assert!(!automaton.contains("CAR"));
    }

    #[test]
    fn delete_then_add_restores_matches() {
        let mut automaton = automaton(&["he", "she", "his", "hers"]);
        let before = automaton.query("ahishers");
        let nodes = automaton.node_count();

        automaton.delete("hers");
        assert!(automaton.is_retired("hers"));
        assert_eq!(automaton.add("hers"), Ok(true));
        assert!(!automaton.is_retired("hers"));
        assert_eq!(automaton.retired_count(), 0);

        assert_eq!(automaton.node_count(), nodes);
        assert_eq!(automaton.query("ahishers"), before);
    }

    #[test]
    fn new_suffix_path_relinks_memoized_links() {
        let mut automaton = automaton(&["abcx"]);
        assert_eq!(automaton.query("abcx"), set(&["abcx"]));
        let abcx = node_at(&automaton, "abcx");
        assert_eq!(automaton.nodes[abcx].failure_link, Some(ROOT));

        automaton.add("bcx").unwrap();
        assert_eq!(
            automaton.nodes[abcx].failure_link,
            Some(node_at(&automaton, "bcx"))
        );
        assert_eq!(automaton.query("abcx"), set(&["abcx", "bcx"]));
    }

    #[test]
    fn relinking_descends_through_nodes_without_the_label() {
        let mut automaton = automaton(&["zaq", "aw"]);
        assert_eq!(automaton.query("zaq"), set(&["zaq"]));
        let zaq = node_at(&automaton, "zaq");
        assert_eq!(automaton.nodes[zaq].failure_link, Some(ROOT));

        // "a" has no 'q' edge, so the repair has to continue into the
        // nodes failing to "a", where "za" owns the stale "zaq" link.
        automaton.add("q").unwrap();
        assert_eq!(automaton.nodes[zaq].failure_link, Some(node_at(&automaton, "q")));
        assert_eq!(automaton.query("zaq"), set(&["zaq", "q"]));

        automaton.add("aq").unwrap();
        assert_eq!(automaton.nodes[zaq].failure_link, Some(node_at(&automaton, "aq")));
        assert_eq!(automaton.query("zaq"), set(&["zaq", "aq", "q"]));
    }

    #[test]
    fn relinked_chains_stay_reachable() {
        let mut automaton = automaton(&["yxad", "xa"]);
        automaton.query("yxad");
        let yxad = node_at(&automaton, "yxad");
        assert_eq!(automaton.nodes[yxad].failure_link, Some(ROOT));

        // "xa" is relinked to the new "a"; "yxad" still fails through "xa",
        // so the repair for "d" must find it by way of "a".
        automaton.add("a").unwrap();
        let a = node_at(&automaton, "a");
        assert_eq!(automaton.nodes[node_at(&automaton, "xa")].failure_link, Some(a));
        assert_eq!(automaton.nodes[a].failure_link, Some(ROOT));

        automaton.add("d").unwrap();
        assert_eq!(automaton.nodes[yxad].failure_link, Some(node_at(&automaton, "d")));
        assert_eq!(automaton.query("yxad"), set(&["yxad", "xa", "a", "d"]));
    }

    #[test]
    fn dependents_mirror_memoized_links() {
        let mut automaton = automaton(&["abab", "bab", "ab"]);
        automaton.query("ababab");
        automaton.add("b").unwrap();
        automaton.add("abb").unwrap();
        automaton.query("abbabab");

        for node in automaton.nodes.ids() {
            for &dependent in &automaton.nodes[node].dependents {
                assert_eq!(automaton.nodes[dependent].failure_link, Some(node));
            }
            if node != ROOT {
                if let Some(link) = automaton.nodes[node].failure_link {
                    assert!(automaton.nodes[link].dependents.contains(&node));
                }
            }
        }
    }

    #[test]
    fn words_are_memoized_per_visited_node() {
        let mut automaton = automaton(&["hers"]);
        automaton.query("hers");
        let hers = node_at(&automaton, "hers");
        assert_eq!(automaton.nodes[hers].word.as_deref(), Some("hers"));
        assert_eq!(automaton.nodes[node_at(&automaton, "he")].word, None);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        const WORDS: [&str; 5] = ["he", "she", "his", "hers", "s"];
        let haystacks = ["ahishers", "shhe", "hishe", "sss"];

        let mut reference = automaton(&WORDS);
        let expected: Vec<_> = haystacks.iter().map(|h| reference.query(*h)).collect();

        for order in WORDS.iter().permutations(WORDS.len()) {
            let mut automaton = PatternAutomaton::new();
            for word in order {
                automaton.add(*word).unwrap();
                // Memoize links between insertions so later ones must repair them.
                automaton.query("ahishers");
            }
            let actual: Vec<_> = haystacks.iter().map(|h| automaton.query(*h)).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn rebuild_drops_retired_nodes() {
        let mut automaton = automaton(&["he", "she", "his", "hers"]);
        automaton.query("ahishers");
        automaton.delete("hers");
        automaton.delete("his");
        let before = automaton.query("ahishers");

        automaton.rebuild();
        assert_eq!(automaton.retired_count(), 0);
        assert_eq!(automaton.len(), 2);
        // root + h, he, s, sh, she
        assert_eq!(automaton.node_count(), 6);
        assert_eq!(automaton.query("ahishers"), before);
    }

    #[test]
    fn rebuild_never_reuses_node_ids() {
        let mut automaton = automaton(&["xyz", "ab"]);
        let x = node_at(&automaton, "x");
        let a = node_at(&automaton, "a");
        let next_id = automaton.nodes.next_id();
        automaton.delete("xyz");

        automaton.rebuild();
        assert!(automaton.node(x).is_none());
        assert!(automaton.node(a).is_none());
        for old in 1..next_id {
            assert!(automaton.node(old).is_none(), "{old}");
        }

        let a_after = node_at(&automaton, "a");
        let ab_after = node_at(&automaton, "ab");
        assert!(a_after >= next_id && ab_after >= next_id);
        assert_eq!(automaton.node(a_after).unwrap().label(), Some('a'));
        assert_eq!(automaton.root().get('a'), Some(a_after));
        assert_eq!(automaton.query("xyzab"), set(&["ab"]));

        // A second rebuild moves on again.
        let next_id = automaton.nodes.next_id();
        automaton.rebuild();
        assert!(automaton.node(a_after).is_none());
        assert!(node_at(&automaton, "a") >= next_id);
    }

    #[test]
    #[should_panic(expected = "has no complete trie path")]
    fn delete_of_active_word_without_trie_path_panics() {
        let mut automaton = automaton(&["ghost"]);
        automaton.active.insert("ghoul".to_string());
        automaton.delete("ghoul");
    }

    #[test]
    fn deep_pattern_resolves_iteratively() {
        let pattern: String = ('a'..='z').cycle().take(20_000).collect();
        let mut automaton = automaton(&[pattern.as_str()]);
        let deepest = node_at(&automaton, &pattern);

        let link = automaton.resolve_failure_link(deepest);
        assert_eq!(link, node_at(&automaton, &pattern[..20_000 - 26]));
        assert_eq!(automaton.resolve_word(deepest), &pattern);
        assert_eq!(automaton.query(pattern.as_str()), set(&[pattern.as_str()]));
    }

    #[test]
    fn generic_u8_automaton() {
        let mut automaton = PatternAutomaton::<u8>::new();
        automaton.add([1, 2, 3]).unwrap();
        automaton.add(vec![2, 3]).unwrap();
        let matches = automaton.query(&[0u8, 1, 2, 3, 4][..]);
        assert_eq!(matches.len(), 2);
        assert!(matches.contains(&vec![1, 2, 3]));
        assert!(matches.contains(&vec![2, 3]));
    }

    #[test]
    fn debug_shows_counts() {
        let automaton = automaton(&["ab"]);
        assert_eq!(
            format!("{automaton:?}"),
            "PatternAutomaton { patterns: 1, retired: 0, node_count: 3 }"
        );
    }

    #[test]
    fn automaton_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternAutomaton<char>>();
    }
}
