//! Unbiased random selection
//!
//! [`RangeSampler`] turns a stream of random bytes from an [`EntropySource`]
//! into uniformly distributed integers below a bound.

mod range;
pub mod source;

pub use range::{Draw, MAX_BITS, RangeError, RangeSampler, required_bits};
pub use source::{EntropyError, EntropySource, OsEntropy};

/// Draw a single value from `[0, max)`
///
/// Convenience wrapper for one-off draws; build a [`RangeSampler`] when
/// sampling the same range repeatedly.
///
/// # Errors
/// Returns `Error::InvalidRange` for an unusable `max` and
/// `Error::EntropyUnavailable` if the source stops working.
///
/// # Examples
/// ```
/// use wordpass::sampler::{OsEntropy, random_below};
///
/// let mut source = OsEntropy::open().unwrap();
/// let roll = random_below(&mut source, 6).unwrap();
/// assert!(roll < 6);
/// ```
pub fn random_below<E: EntropySource + ?Sized>(source: &mut E, max: usize) -> crate::Result<Draw> {
    let sampler = RangeSampler::new(max)?;
    Ok(sampler.sample(source)?)
}
