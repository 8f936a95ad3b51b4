//! Generated passphrase

use super::Word;
use std::fmt;
use std::io::{self, Write};

/// Words drawn for one passphrase, in draw order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Passphrase {
    words: Vec<Word>,
}

impl Passphrase {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

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

    /// Write the words separated by single spaces, exactly as stored
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.write_all(b" ")?;
            }
            out.write_all(word.as_bytes())?;
        }
        Ok(())
    }
}

impl fmt::Display for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
