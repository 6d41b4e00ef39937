use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as edge labels in a pattern trie.
///
/// Each label type names the word type the automaton reports matches as:
/// `char` labels produce `String` words, integer labels produce `Vec`s.
///
/// - `Copy`: edges store labels by value
/// - `Eq + Hash`: child lookup and dictionary membership
/// - `Debug`: debug printing of nodes
pub trait PatternChar: Copy + Eq + Hash + Debug {
    /// The owned word a root-to-node path spells.
    type Word: Clone + Eq + Hash + Debug + Default;

    /// Collects a label sequence into a word.
    fn word_from(chars: &[Self]) -> Self::Word;

    /// Appends `self` to the end of `word`.
    fn push_to(self, word: &mut Self::Word);
}

impl PatternChar for char {
    type Word = String;

    fn word_from(chars: &[char]) -> String {
        chars.iter().collect()
    }

    fn push_to(self, word: &mut String) {
        word.push(self);
    }
}

macro_rules! impl_sequence_char {
    ($($t:ty),*) => {
        $(
            impl PatternChar for $t {
                type Word = Vec<$t>;

                fn word_from(chars: &[$t]) -> Vec<$t> {
                    chars.to_vec()
                }

                fn push_to(self, word: &mut Vec<$t>) {
                    word.push(self);
                }
            }
        )*
    };
}

impl_sequence_char!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
