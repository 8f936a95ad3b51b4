//! Passphrase generator
//!
//! Ties a loaded vocabulary to an entropy source. All state lives in the
//! [`Generator`]; dropping it releases the source and the word storage.

mod engine;

pub use engine::Generator;
