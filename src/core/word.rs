//! Passphrase word representation
//!
//! A Word is one wordlist entry stored as raw bytes. Wordlists are not required
//! to be UTF-8, so nothing here assumes an encoding.

use std::fmt;

/// Longest accepted word in bytes
///
/// Matches the usable capacity of a 512-byte line buffer (newline and
/// terminator excluded).
pub const MAX_WORD_LEN: usize = 510;

/// A single wordlist entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    bytes: Box<[u8]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    TooLong(usize),
    ContainsNewline,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::TooLong(len) => {
                write!(f, "Word must be at most {MAX_WORD_LEN} bytes, got {len}")
            }
            Self::ContainsNewline => write!(f, "Word must not contain a newline"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from raw bytes
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - The input is longer than [`MAX_WORD_LEN`]
    /// - The input contains a `\n`
    ///
    /// # Examples
    /// ```
    /// use wordpass::core::Word;
    ///
    /// let word = Word::new("alpha").unwrap();
    /// assert_eq!(word.as_bytes(), b"alpha");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two\nlines").is_err());
    /// ```
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self, WordError> {
        let bytes = bytes.as_ref();

        if bytes.is_empty() {
            return Err(WordError::Empty);
        }

        if bytes.len() > MAX_WORD_LEN {
            return Err(WordError::TooLong(bytes.len()));
        }

        if bytes.contains(&b'\n') {
            return Err(WordError::ContainsNewline);
        }

        Ok(Self {
            bytes: bytes.into(),
        })
    }

    /// Get the word as raw bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for Word {
    /// Lossy UTF-8 rendering; use [`Word::as_bytes`] for exact output
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}
