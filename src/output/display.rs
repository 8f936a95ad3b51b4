//! Display functions for command results
//!
//! Everything writes to a caller-supplied sink so `main` can pass stdout and
//! stderr while tests pass buffers.

use crate::core::Passphrase;
use crate::entropy::EntropyEstimate;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};

/// Print the entropy estimate line
///
/// # Errors
/// Returns any error from the writer.
pub fn print_entropy_estimate<W: Write + ?Sized>(
    out: &mut W,
    estimate: &EntropyEstimate,
) -> io::Result<()> {
    writeln!(out, "Estimated entropy: {estimate}")
}

/// Print the passphrase followed by a newline
///
/// # Errors
/// Returns any error from the writer.
pub fn print_passphrase<W: Write + ?Sized>(out: &mut W, passphrase: &Passphrase) -> io::Result<()> {
    passphrase.write_to(out)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Print a fatal error message
///
/// # Errors
/// Returns any error from the writer.
pub fn print_fatal_error<W: Write + ?Sized>(out: &mut W, error: &dyn Display) -> io::Result<()> {
    writeln!(out, "{} {error}", "FATAL ERROR:".red().bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::entropy::estimate;

    #[test]
    fn entropy_line_format() {
        let mut out: Vec<u8> = Vec::new();
        print_entropy_estimate(&mut out, &estimate(2048, 5)).unwrap();
        assert_eq!(out, b"Estimated entropy: 55~ bits\n");
    }

    #[test]
    fn passphrase_line_format() {
        let passphrase = Passphrase::new(vec![
            Word::new("alpha").unwrap(),
            Word::new("bravo").unwrap(),
        ]);
        let mut out: Vec<u8> = Vec::new();
        print_passphrase(&mut out, &passphrase).unwrap();
        assert_eq!(out, b"alpha bravo\n");
    }

    #[test]
    fn empty_passphrase_is_just_newline() {
        let mut out: Vec<u8> = Vec::new();
        print_passphrase(&mut out, &Passphrase::default()).unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn fatal_error_has_label() {
        colored::control::set_override(false);
        let mut out: Vec<u8> = Vec::new();
        print_fatal_error(&mut out, &"Failed to open wordlist").unwrap();
        assert_eq!(out, b"FATAL ERROR: Failed to open wordlist\n");
    }
}
