//! Worst-case entropy of a wordlist passphrase
//!
//! Assumes the attacker knows the exact wordlist and enumerates every
//! sequence of N words from it, rather than brute-forcing characters.

use std::fmt;

/// Entropy estimate for N words drawn with replacement from V words
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyEstimate {
    bits: f64,
}

impl EntropyEstimate {
    /// Estimated entropy in bits
    #[inline]
    #[must_use]
    pub const fn bits(&self) -> f64 {
        self.bits
    }

    /// Estimated entropy rounded down to whole bits
    #[inline]
    #[must_use]
    pub fn whole_bits(&self) -> u64 {
        self.bits.floor() as u64
    }
}

impl fmt::Display for EntropyEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~ bits", self.whole_bits())
    }
}

/// Estimate passphrase entropy
///
/// # Formula
/// H = log₂(V^N) = N · log₂(V)
///
/// Computed in log space so large vocabularies and word counts cannot
/// overflow. A single-word vocabulary gives 0 bits; so do an empty
/// vocabulary and a zero word count.
///
/// # Examples
/// ```
/// use wordpass::entropy::estimate;
///
/// assert_eq!(estimate(2048, 5).whole_bits(), 55);
/// assert_eq!(estimate(7776, 6).whole_bits(), 77);
/// assert_eq!(estimate(1, 10).whole_bits(), 0);
/// ```
#[must_use]
pub fn estimate(vocabulary_size: usize, word_count: usize) -> EntropyEstimate {
    if vocabulary_size == 0 || word_count == 0 {
        return EntropyEstimate { bits: 0.0 };
    }

    EntropyEstimate {
        bits: word_count as f64 * (vocabulary_size as f64).log2(),
    }
}
