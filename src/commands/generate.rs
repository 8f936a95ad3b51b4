//! Generate command
//!
//! Loads the wordlist, reports the entropy estimate, and prints one
//! passphrase.

use crate::core::Passphrase;
use crate::generator::Generator;
use crate::output::{print_entropy_estimate, print_passphrase};
use crate::sampler::{EntropyError, EntropySource};
use crate::wordlists::{DEFAULT_WORDLIST, load_from_file};
use crate::{Error, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Number of words when none is requested
pub const DEFAULT_WORD_COUNT: usize = 5;

/// Settings for one generate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub word_count: usize,
    pub wordlist: PathBuf,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            wordlist: PathBuf::from(DEFAULT_WORDLIST),
        }
    }
}

impl GenerateConfig {
    /// Build a config from the optional word-count argument
    ///
    /// # Errors
    /// Returns `Error::InvalidWordCount` if the argument is not a positive
    /// decimal integer.
    ///
    /// # Examples
    /// ```
    /// use wordpass::commands::{DEFAULT_WORD_COUNT, GenerateConfig};
    ///
    /// assert_eq!(GenerateConfig::from_arg(None).unwrap().word_count, DEFAULT_WORD_COUNT);
    /// assert_eq!(GenerateConfig::from_arg(Some("8")).unwrap().word_count, 8);
    /// assert!(GenerateConfig::from_arg(Some("eight")).is_err());
    /// ```
    pub fn from_arg(word_count: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(arg) = word_count {
            config.word_count = parse_word_count(arg)?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_wordlist(mut self, wordlist: impl Into<PathBuf>) -> Self {
        self.wordlist = wordlist.into();
        self
    }
}

/// Parse a word count: a positive decimal integer
///
/// # Errors
/// Returns `Error::InvalidWordCount` for zero, negative, non-numeric, or
/// partially numeric input.
pub fn parse_word_count(arg: &str) -> Result<usize> {
    match arg.parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(Error::InvalidWordCount(arg.to_string())),
    }
}

/// Run one passphrase generation
///
/// Loads the wordlist, then calls `open_source` for the entropy source, so a
/// missing wordlist is reported ahead of a missing entropy source. Writes the
/// entropy estimate to `diagnostics` and the passphrase to `out`. Nothing is
/// written unless the wordlist loads and can be sampled. The source is
/// dropped exactly once whichever way this returns.
///
/// # Errors
/// Any fatal [`Error`]: wordlist, range, entropy source, or output failures.
pub fn run_generate<E, F, O, D>(
    config: &GenerateConfig,
    open_source: F,
    out: &mut O,
    diagnostics: &mut D,
) -> Result<Passphrase>
where
    E: EntropySource,
    F: FnOnce() -> std::result::Result<E, EntropyError>,
    O: Write + ?Sized,
    D: Write + ?Sized,
{
    let vocabulary = load_from_file(&config.wordlist)?;
    let source = open_source()?;
    let mut generator = Generator::new(vocabulary, source)?;
    debug!(
        words = generator.vocabulary().len(),
        requested = config.word_count,
        "generating passphrase"
    );

    print_entropy_estimate(diagnostics, &generator.estimate(config.word_count))?;

    let passphrase = generator.passphrase(config.word_count)?;
    print_passphrase(out, &passphrase)?;

    Ok(passphrase)
}
