//! Terminal output formatting

pub mod display;

pub use display::{print_entropy_estimate, print_fatal_error, print_passphrase};
