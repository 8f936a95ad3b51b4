//! Unbiased sampling from `[0, max)`
//!
//! Reads the fewest whole bytes that can hold `max - 1`, drops the surplus
//! low-order bits, and rejects anything `>= max`. Rejection keeps every value
//! equally likely; modulo reduction would not.

use super::source::{EntropyError, EntropySource};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Integer type the sampler draws into
pub type Draw = u32;

/// Widest range the sampler can service, in bits
pub const MAX_BITS: u32 = Draw::BITS;

/// Upper bound the sampler cannot work with
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("upper bound {0} leaves nothing to choose from (need at least 2)")]
    TooSmall(usize),

    #[error("upper bound {max} needs {bits} bits, the sampler supports at most {}", MAX_BITS)]
    TooLarge { max: usize, bits: u32 },
}

/// Number of bits needed to represent every value below `max`
///
/// This is the bit length of `max - 1`. Note that `ceil(log2(max - 1))` is one
/// short whenever `max - 1` is a power of two, which would leave `max - 1`
/// unreachable.
///
/// # Examples
/// ```
/// use wordpass::sampler::required_bits;
///
/// assert_eq!(required_bits(2), 1);
/// assert_eq!(required_bits(3), 2);
/// assert_eq!(required_bits(4), 2);
/// assert_eq!(required_bits(17), 5);
/// assert_eq!(required_bits(1), 0);
/// ```
#[must_use]
pub const fn required_bits(max: usize) -> u32 {
    if max <= 1 {
        return 0;
    }
    usize::BITS - (max - 1).leading_zeros()
}

/// Validated sampler geometry for one upper bound
///
/// Construct once per range, then call [`RangeSampler::sample`] as often as
/// needed. Validation happens here so an unusable range is reported before
/// any bytes are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSampler {
    max: usize,
    bits: u32,
    bytes: usize,
    wastage: u32,
}

impl RangeSampler {
    /// Create a sampler for `[0, max)`
    ///
    /// # Errors
    /// Returns `RangeError::TooSmall` if `max <= 1` and `RangeError::TooLarge`
    /// if `max - 1` does not fit in [`MAX_BITS`] bits.
    ///
    /// # Examples
    /// ```
    /// use wordpass::sampler::{RangeError, RangeSampler};
    ///
    /// let sampler = RangeSampler::new(257).unwrap();
    /// assert_eq!(sampler.bits(), 9);
    /// assert_eq!(sampler.bytes(), 2);
    /// assert_eq!(sampler.wastage(), 7);
    ///
    /// assert_eq!(RangeSampler::new(1), Err(RangeError::TooSmall(1)));
    /// ```
    pub fn new(max: usize) -> Result<Self, RangeError> {
        if max <= 1 {
            return Err(RangeError::TooSmall(max));
        }

        let bits = required_bits(max);
        if bits > MAX_BITS {
            return Err(RangeError::TooLarge { max, bits });
        }

        let bytes = bits.div_ceil(8) as usize;
        let wastage = bytes as u32 * 8 - bits;

        debug!(max, bits, bytes, wastage, "range sampler ready");

        Ok(Self {
            max,
            bits,
            bytes,
            wastage,
        })
    }

    /// Exclusive upper bound
    #[inline]
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Significant bits per draw
    #[inline]
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Bytes read from the source per draw
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> usize {
        self.bytes
    }

    /// Low-order bits discarded per draw
    #[inline]
    #[must_use]
    pub const fn wastage(&self) -> u32 {
        self.wastage
    }

    /// Draw one value uniformly from `[0, max)`
    ///
    /// Each attempt reads [`bytes`](Self::bytes) fresh bytes, assembles them
    /// little-endian into the low-order bytes of a [`Draw`], and shifts out
    /// [`wastage`](Self::wastage) bits. Out-of-range values are rejected and
    /// redrawn. Transient read failures are logged and retried without
    /// touching the failed buffer.
    ///
    /// # Errors
    /// Returns `EntropyError::Unavailable` only if the source reports that it
    /// can no longer be read at all.
    pub fn sample<E: EntropySource + ?Sized>(&self, source: &mut E) -> Result<Draw, EntropyError> {
        loop {
            let mut buf = [0u8; (MAX_BITS / 8) as usize];

            match source.fill(&mut buf[..self.bytes]) {
                Ok(()) => {
                    let value = Draw::from_le_bytes(buf) >> self.wastage;
                    if (value as usize) < self.max {
                        return Ok(value);
                    }
                    trace!(value, max = self.max, "rejected out-of-range draw");
                }
                Err(EntropyError::Transient(reason)) => {
                    warn!(%reason, "entropy read failed, retrying");
                }
                Err(err @ EntropyError::Unavailable(_)) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::source::OsEntropy;
    use crate::sampler::source::testing::{ScriptedEntropy, Step};

    #[test]
    fn required_bits_boundaries() {
        let cases = [
            (2, 1),
            (3, 2),
            (4, 2),
            (5, 3),
            (16, 4),
            (17, 5),
            (256, 8),
            (257, 9),
            (2048, 11),
            (2049, 12),
        ];
        for (max, bits) in cases {
            assert_eq!(required_bits(max), bits, "max = {max}");
        }
    }

    #[test]
    fn geometry_single_byte() {
        let sampler = RangeSampler::new(3).unwrap();
        assert_eq!(sampler.max(), 3);
        assert_eq!(sampler.bits(), 2);
        assert_eq!(sampler.bytes(), 1);
        assert_eq!(sampler.wastage(), 6);
    }

    #[test]
    fn geometry_full_width() {
        let max = Draw::MAX as usize;
        let sampler = RangeSampler::new(max).unwrap();
        assert_eq!(sampler.bits(), 32);
        assert_eq!(sampler.bytes(), 4);
        assert_eq!(sampler.wastage(), 0);
    }

    #[test]
    fn rejects_too_small() {
        assert_eq!(RangeSampler::new(0), Err(RangeError::TooSmall(0)));
        assert_eq!(RangeSampler::new(1), Err(RangeError::TooSmall(1)));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn rejects_too_large() {
        let largest = Draw::MAX as usize + 1;
        assert!(RangeSampler::new(largest).is_ok());

        let max = largest + 1;
        assert_eq!(
            RangeSampler::new(max),
            Err(RangeError::TooLarge { max, bits: 33 })
        );
    }

    #[test]
    fn top_bits_are_kept() {
        let sampler = RangeSampler::new(2).unwrap();
        let mut source = ScriptedEntropy::bytes(&[0x80, 0x7f]);

        assert_eq!(sampler.sample(&mut source).unwrap(), 1);
        assert_eq!(sampler.sample(&mut source).unwrap(), 0);
    }

    #[test]
    fn out_of_range_draws_are_rejected() {
        // max = 3 keeps the top two bits; 0b11 is out of range
        let sampler = RangeSampler::new(3).unwrap();
        let mut source = ScriptedEntropy::bytes(&[0b1100_0000, 0b1111_1111, 0b1000_0000]);

        assert_eq!(sampler.sample(&mut source).unwrap(), 2);
        assert_eq!(source.reads, 3);
    }

    #[test]
    fn every_value_below_max_is_reachable() {
        let sampler = RangeSampler::new(3).unwrap();
        let mut source = ScriptedEntropy::bytes(&[0x00, 0x40, 0x80]);

        let values: Vec<Draw> = (0..3)
            .map(|_| sampler.sample(&mut source).unwrap())
            .collect();
        assert_eq!(values, [0, 1, 2]);
    }

    #[test]
    fn bytes_assembled_little_endian() {
        // 9 bits from 2 bytes, 7 wasted
        let sampler = RangeSampler::new(257).unwrap();
        let mut source = ScriptedEntropy::new([
            Step::Bytes(vec![0x00, 0x80]),
            Step::Bytes(vec![0x80, 0x00]),
        ]);

        assert_eq!(sampler.sample(&mut source).unwrap(), 256);
        assert_eq!(sampler.sample(&mut source).unwrap(), 1);
    }

    #[test]
    fn transient_failure_is_retried_with_fresh_buffer() {
        // The failing read leaves 0xff behind, which would decode to 3
        let sampler = RangeSampler::new(4).unwrap();
        let mut source = ScriptedEntropy::new([Step::Fail, Step::Fail, Step::Bytes(vec![0x40])]);

        assert_eq!(sampler.sample(&mut source).unwrap(), 1);
        assert_eq!(source.reads, 3);
    }

    #[test]
    fn unavailable_source_is_fatal() {
        let sampler = RangeSampler::new(4).unwrap();
        let mut source = ScriptedEntropy::new([Step::Fail, Step::Gone]);

        assert!(matches!(
            sampler.sample(&mut source),
            Err(EntropyError::Unavailable(_))
        ));
    }

    #[test]
    fn uniform_over_small_ranges() {
        let mut source = OsEntropy::open().unwrap();

        for max in [2usize, 3, 16, 17, 256, 257] {
            let sampler = RangeSampler::new(max).unwrap();
            let per_bucket = 400;
            let mut counts = vec![0usize; max];

            for _ in 0..max * per_bucket {
                let value = sampler.sample(&mut source).unwrap() as usize;
                assert!(value < max, "{value} >= {max}");
                counts[value] += 1;
            }

            // ~7 standard deviations either side
            let (low, high) = (per_bucket * 65 / 100, per_bucket * 135 / 100);
            for (value, &count) in counts.iter().enumerate() {
                assert!(
                    (low..=high).contains(&count),
                    "max = {max}: value {value} drawn {count} times, expected ~{per_bucket}"
                );
            }
        }
    }

    #[test]
    fn wide_ranges_stay_in_bounds() {
        let mut source = OsEntropy::open().unwrap();

        for max in [65_537usize, (1 << 31) + 1, Draw::MAX as usize] {
            let sampler = RangeSampler::new(max).unwrap();
            for _ in 0..2_000 {
                assert!((sampler.sample(&mut source).unwrap() as usize) < max);
            }
        }
    }
}
