//! Word list loading utilities
//!
//! Reads line-oriented wordlists: one word per line, blank lines skipped,
//! file order preserved, duplicates kept.

use crate::core::{MAX_WORD_LEN, Vocabulary, Word, WordError};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Most bytes read for one line: the word plus `\r\n`
const LINE_BUFFER_LEN: usize = MAX_WORD_LEN + 2;

/// Load a vocabulary from a file
///
/// The file handle is closed before this returns, on success and on error.
///
/// # Errors
///
/// Returns `Error::WordlistOpen` if the file cannot be opened, and any error
/// from [`load_from_reader`] for its contents.
///
/// # Examples
/// ```no_run
/// use wordpass::wordlists::loader::load_from_file;
///
/// let vocabulary = load_from_file("words").unwrap();
/// println!("Loaded {} words", vocabulary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vocabulary> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::WordlistOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let vocabulary = load_from_reader(BufReader::new(file))?;
    debug!(path = %path.display(), words = vocabulary.len(), "wordlist loaded");

    Ok(vocabulary)
}

/// Load a vocabulary from any buffered reader
///
/// Strips the trailing `\n` (and a `\r` before it) from each line. Words are
/// kept as raw bytes.
///
/// # Errors
///
/// - `Error::WordlistRead` if reading fails
/// - `Error::LineTooLong` if a line exceeds [`MAX_WORD_LEN`] bytes
/// - `Error::Allocation` if the word vector cannot grow
///
/// # Examples
/// ```
/// use wordpass::wordlists::loader::load_from_reader;
///
/// let vocabulary = load_from_reader(&b"alpha\nbravo\n\ncharlie"[..]).unwrap();
/// assert_eq!(vocabulary.len(), 3);
/// assert_eq!(vocabulary[2].as_bytes(), b"charlie");
/// ```
pub fn load_from_reader<R: BufRead>(mut reader: R) -> Result<Vocabulary> {
    let mut words: Vec<Word> = Vec::new();
    let mut line = Vec::with_capacity(LINE_BUFFER_LEN);
    let mut line_number = 0;

    loop {
        line.clear();
        let read = reader
            .by_ref()
            .take(LINE_BUFFER_LEN as u64)
            .read_until(b'\n', &mut line)
            .map_err(Error::WordlistRead)?;
        if read == 0 {
            break;
        }
        line_number += 1;

        // A full buffer without a newline means the line goes on
        if read == LINE_BUFFER_LEN && !line.ends_with(b"\n") {
            return Err(Error::LineTooLong {
                line: line_number,
                limit: MAX_WORD_LEN,
            });
        }

        match Word::new(strip_line_ending(&line)) {
            Ok(word) => {
                words.try_reserve(1)?;
                words.push(word);
            }
            Err(WordError::Empty) => {}
            Err(WordError::TooLong(_) | WordError::ContainsNewline) => {
                return Err(Error::LineTooLong {
                    line: line_number,
                    limit: MAX_WORD_LEN,
                });
            }
        }
    }

    let vocabulary = Vocabulary::new(words);
    let distinct = vocabulary.distinct_count();
    if distinct < vocabulary.len() {
        warn!(
            words = vocabulary.len(),
            distinct,
            "wordlist contains duplicates; real entropy is lower than estimated"
        );
    }

    Ok(vocabulary)
}

/// Convert a string slice to a vocabulary, skipping invalid entries
///
/// # Examples
/// ```
/// use wordpass::wordlists::loader::words_from_slice;
///
/// let vocabulary = words_from_slice(&["alpha", "", "bravo"]);
/// assert_eq!(vocabulary.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vocabulary {
    slice
        .iter()
        .filter_map(|&s| Word::new(s).ok())
        .collect::<Vec<_>>()
        .into()
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
