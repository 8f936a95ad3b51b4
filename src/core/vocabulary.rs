//! Vocabulary: the ordered, immutable list of words to draw from

use super::Word;
use rustc_hash::FxHashSet;
use std::ops::Index;

/// Ordered wordlist, read-only after loading
///
/// Duplicates are kept. They count towards [`Vocabulary::len`] (and therefore
/// the entropy estimate) even though they lower the effective entropy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    /// Wrap an already-built word vector
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Number of entries, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct entries
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.words.iter().collect::<FxHashSet<_>>().len()
    }

    /// Get the word at `index`, if in range
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// All words in file order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl Index<usize> for Vocabulary {
    type Output = Word;

    fn index(&self, index: usize) -> &Word {
        &self.words[index]
    }
}

impl From<Vec<Word>> for Vocabulary {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
