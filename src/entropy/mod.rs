//! Passphrase entropy estimation
//!
//! Reports how many bits of entropy a passphrase carries against an attacker
//! who knows the wordlist. The figure is informational only.

mod estimator;

pub use estimator::{EntropyEstimate, estimate};
