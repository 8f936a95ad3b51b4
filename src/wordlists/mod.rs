//! Word lists for passphrase generation
//!
//! Wordlists are read from disk at startup; nothing is embedded in the binary.

pub mod loader;

pub use loader::{load_from_file, load_from_reader, words_from_slice};

/// Wordlist path used when none is configured, relative to the working directory
pub const DEFAULT_WORDLIST: &str = "words";
