//! Main passphrase generator interface

use crate::Result;
use crate::core::{Passphrase, Vocabulary, Word};
use crate::entropy::{EntropyEstimate, estimate};
use crate::sampler::{EntropySource, RangeSampler};

/// Draws words uniformly, with replacement, from a vocabulary
///
/// Owns the vocabulary and the entropy source for the lifetime of one run.
/// The sampling range is validated on construction, so a vocabulary that
/// cannot be sampled is rejected before anything is drawn or printed.
#[derive(Debug)]
pub struct Generator<E: EntropySource> {
    vocabulary: Vocabulary,
    sampler: RangeSampler,
    source: E,
}

impl<E: EntropySource> Generator<E> {
    /// Create a generator for `vocabulary`
    ///
    /// # Errors
    /// Returns `Error::InvalidRange` if the vocabulary has fewer than two
    /// entries or more than the sampler can index. The source is dropped in
    /// that case.
    ///
    /// # Examples
    /// ```
    /// use wordpass::generator::Generator;
    /// use wordpass::sampler::OsEntropy;
    /// use wordpass::wordlists::words_from_slice;
    ///
    /// let vocabulary = words_from_slice(&["alpha", "bravo", "charlie", "delta"]);
    /// let mut generator = Generator::new(vocabulary, OsEntropy::open().unwrap()).unwrap();
    ///
    /// assert_eq!(generator.estimate(3).whole_bits(), 6);
    /// assert_eq!(generator.passphrase(3).unwrap().len(), 3);
    /// ```
    pub fn new(vocabulary: Vocabulary, source: E) -> Result<Self> {
        let sampler = RangeSampler::new(vocabulary.len())?;
        Ok(Self {
            vocabulary,
            sampler,
            source,
        })
    }

    #[inline]
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Entropy estimate for a passphrase of `word_count` words
    #[must_use]
    pub fn estimate(&self, word_count: usize) -> EntropyEstimate {
        estimate(self.vocabulary.len(), word_count)
    }

    /// Draw a single word
    ///
    /// # Errors
    /// Returns `Error::EntropyUnavailable` if the source stops working.
    pub fn next_word(&mut self) -> Result<&Word> {
        let index = self.sampler.sample(&mut self.source)? as usize;
        Ok(&self.vocabulary[index])
    }

    /// Draw `word_count` independent words
    ///
    /// # Errors
    /// Returns `Error::EntropyUnavailable` if the source stops working, or
    /// `Error::Allocation` if the result cannot be allocated.
    pub fn passphrase(&mut self, word_count: usize) -> Result<Passphrase> {
        let mut words = Vec::new();
        words.try_reserve_exact(word_count)?;

        for _ in 0..word_count {
            words.push(self.next_word()?.clone());
        }

        Ok(Passphrase::new(words))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::sampler::RangeError;
    use crate::sampler::source::testing::{ScriptedEntropy, Step};
    use crate::wordlists::words_from_slice;

    fn nato() -> Vocabulary {
        words_from_slice(&["alpha", "bravo", "charlie", "delta"])
    }

    #[test]
    fn picks_words_by_sampled_index() {
        // 4 words: 2 bits from the top of each byte
        let source = ScriptedEntropy::bytes(&[0xc0, 0x00, 0x80]);
        let mut generator = Generator::new(nato(), source).unwrap();

        let phrase = generator.passphrase(3).unwrap();
        assert_eq!(phrase.to_string(), "delta alpha charlie");
    }

    #[test]
    fn rejects_single_word_vocabulary() {
        let source = ScriptedEntropy::default();
        let drops = source.drop_counter();

        let result = Generator::new(words_from_slice(&["solo"]), source);

        assert!(matches!(
            result,
            Err(Error::InvalidRange(RangeError::TooSmall(1)))
        ));
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn rejects_empty_vocabulary() {
        let result = Generator::new(Vocabulary::default(), ScriptedEntropy::default());
        assert!(matches!(
            result,
            Err(Error::InvalidRange(RangeError::TooSmall(0)))
        ));
    }

    #[test]
    fn estimate_uses_vocabulary_size() {
        let generator = Generator::new(nato(), ScriptedEntropy::default()).unwrap();
        assert_eq!(generator.estimate(3).whole_bits(), 6);
        assert_eq!(generator.estimate(0).whole_bits(), 0);
        assert_eq!(generator.vocabulary().len(), 4);
    }

    #[test]
    fn zero_words_reads_nothing() {
        let mut generator = Generator::new(nato(), ScriptedEntropy::default()).unwrap();
        let phrase = generator.passphrase(0).unwrap();
        assert!(phrase.is_empty());
        assert_eq!(generator.source.reads, 0);
    }

    #[test]
    fn lost_source_is_fatal() {
        let source = ScriptedEntropy::new([Step::Bytes(vec![0x40]), Step::Gone]);
        let mut generator = Generator::new(nato(), source).unwrap();

        let err = generator.passphrase(2).unwrap_err();
        assert!(matches!(err, Error::EntropyUnavailable(_)));
    }

    #[test]
    fn source_dropped_once_with_generator() {
        let source = ScriptedEntropy::bytes(&[0x00]);
        let drops = source.drop_counter();
        {
            let mut generator = Generator::new(nato(), source).unwrap();
            generator.next_word().unwrap();
            assert_eq!(drops.get(), 0);
        }
        assert_eq!(drops.get(), 1);
    }
}
