use smallvec::SmallVec;

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};

use super::automaton::PatternAutomaton;
use super::char_trait::PatternChar;
use super::error::Result;

/// Trait for types that can be used as a pattern or haystack.
///
/// Implemented for common string and sequence types so that
/// [`PatternAutomaton::add`], [`PatternAutomaton::query`] and
/// [`build_automaton`] accept them directly without manual conversion.
pub trait IntoWord<C: PatternChar> {
    /// Collects this word into a character buffer.
    fn collect_word(self) -> SmallVec<[C; 32]>;
}

// String types → char

impl IntoWord<char> for &str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &&str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: PatternChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: PatternChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: PatternChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: PatternChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: PatternChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

/// Builds an automaton from an iterator of patterns.
///
/// Patterns may come in any order and may repeat. The first empty pattern
/// aborts construction with [`AutomatonError::EmptyPattern`](super::AutomatonError::EmptyPattern).
///
/// # Examples
///
/// ```
/// use libaho::matcher::builder::build_automaton;
///
/// let mut automaton = build_automaton(["he", "she", "his", "hers"]).unwrap();
/// let matches = automaton.query("ushers");
/// assert_eq!(matches.len(), 3);
/// assert!(matches.contains("hers"));
/// ```
///
/// Building from byte sequences:
///
/// ```
/// use libaho::matcher::builder::build_automaton;
///
/// let words: Vec<Vec<u8>> = vec![vec![1, 2], vec![2, 3]];
/// let mut automaton = build_automaton(words).unwrap();
/// assert_eq!(automaton.query([0u8, 1, 2, 3]).len(), 2);
/// ```
pub fn build_automaton<C, W>(words: impl IntoIterator<Item = W>) -> Result<PatternAutomaton<C>>
where
    C: PatternChar,
    W: IntoWord<C>,
{
    let mut automaton = PatternAutomaton::new();
    for word in words {
        automaton.add(word)?;
    }
    Ok(automaton)
}

/// Builds an automaton from a pattern file and returns it.
///
/// Reads patterns from a text file (one per line). Lines starting with '#'
/// are treated as comments and ignored. Empty lines are skipped.
///
/// # Examples
///
/// ```no_run
/// use libaho::matcher::builder::build_automaton_from_file;
///
/// let automaton = build_automaton_from_file("patterns.txt").unwrap();
/// ```
pub fn build_automaton_from_file(
    filename: &str,
) -> std::result::Result<PatternAutomaton<char>, Box<dyn Error>> {
    let mut automaton = PatternAutomaton::new();
    let file = File::open(filename)?;
    let mut reader = BufReader::new(file);

    // read_line into one reused buffer instead of allocating a String per line.
    let mut buf = String::with_capacity(80);
    loop {
        let bytes_read = reader.read_line(&mut buf);
        match bytes_read {
            Ok(0) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            automaton.add(word)?;
        }
        buf.clear();
    }
    Ok(automaton)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
