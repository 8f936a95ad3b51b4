//! Entropy sources
//!
//! The sampler reads raw bytes through the [`EntropySource`] trait. The only
//! production backend is [`OsEntropy`], the operating system CSPRNG.

use rand::TryRngCore;
use rand::rngs::OsRng;
use thiserror::Error;

/// Failure reading from an entropy source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntropyError {
    /// Short read or similar hiccup; the caller should retry
    #[error("transient read failure: {0}")]
    Transient(String),

    /// The source cannot be used at all
    #[error("{0}")]
    Unavailable(String),
}

/// A stream of cryptographically strong random bytes
pub trait EntropySource {
    /// Fill `buf` completely
    ///
    /// On error the contents of `buf` are unspecified and must be discarded.
    ///
    /// # Errors
    /// Returns `EntropyError::Transient` when the read can be retried and
    /// `EntropyError::Unavailable` when it cannot.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(buf)
    }
}

/// Operating system randomness
#[derive(Debug)]
pub struct OsEntropy {
    rng: OsRng,
}

impl OsEntropy {
    /// Open the OS entropy source
    ///
    /// Performs one probe read so that a missing source is reported up front
    /// rather than in the middle of sampling.
    ///
    /// # Errors
    /// Returns `EntropyError::Unavailable` if the probe read fails.
    pub fn open() -> Result<Self, EntropyError> {
        let mut rng = OsRng;
        let mut probe = [0u8; 1];
        rng.try_fill_bytes(&mut probe)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))?;
        Ok(Self { rng })
    }
}

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        self.rng
            .try_fill_bytes(buf)
            .map_err(|e| EntropyError::Transient(e.to_string()))
    }
}
