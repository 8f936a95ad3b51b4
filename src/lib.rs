//! Wordpass
//!
//! Generates passphrases by drawing words uniformly at random from a wordlist,
//! and estimates their entropy against an attacker who knows the list.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordpass::generator::Generator;
//! use wordpass::sampler::OsEntropy;
//! use wordpass::wordlists::load_from_file;
//!
//! let vocabulary = load_from_file("words").unwrap();
//! let mut generator = Generator::new(vocabulary, OsEntropy::open().unwrap()).unwrap();
//!
//! println!("{} bits", generator.estimate(5).whole_bits());
//! println!("{}", generator.passphrase(5).unwrap());
//! ```

// Core domain types
pub mod core;

// Unbiased sampling and entropy sources
pub mod sampler;

// Entropy estimation
pub mod entropy;

// Word lists
pub mod wordlists;

// Vocabulary + entropy source context
pub mod generator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

mod error;

pub use error::{Error, Result};
