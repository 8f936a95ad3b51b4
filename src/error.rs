//! Error types for passphrase generation

use crate::sampler::{EntropyError, RangeError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors
///
/// Every variant terminates the program. Transient entropy read failures are
/// retried inside the sampler and never surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open wordlist {}: {source}", path.display())]
    WordlistOpen { path: PathBuf, source: io::Error },

    #[error("Failed to read wordlist: {0}")]
    WordlistRead(#[source] io::Error),

    #[error("Wordlist line {line} is longer than {limit} bytes")]
    LineTooLong { line: usize, limit: usize },

    #[error("Failed to allocate memory")]
    Allocation(#[from] std::collections::TryReserveError),

    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(#[from] EntropyError),

    #[error("Invalid word count '{0}': expected a positive integer")]
    InvalidWordCount(String),

    #[error("Invalid range: {0}")]
    InvalidRange(#[from] RangeError),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}
