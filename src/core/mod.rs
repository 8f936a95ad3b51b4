//! Core domain types for passphrases
//!
//! This module contains the fundamental domain types with no I/O beyond
//! writing to a caller-supplied sink.

mod passphrase;
mod vocabulary;
mod word;

pub use passphrase::Passphrase;
pub use vocabulary::Vocabulary;
pub use word::{MAX_WORD_LEN, Word, WordError};
