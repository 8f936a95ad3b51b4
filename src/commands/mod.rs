//! Command implementations

pub mod generate;

pub use generate::{DEFAULT_WORD_COUNT, GenerateConfig, parse_word_count, run_generate};
