//! Word list loading and cleanup.
//!
//! The engine places whatever strings it is given, so the CLI is responsible
//! for handing it lowercase, letters-only, distinct words.

use std::fs;
use std::path::Path;

/// Environment variable naming a default word file
pub const WORDS_ENV: &str = "WORDSEARCH_WORDS";

/// Lowercase each word, strip everything but ASCII letters, drop empties and
/// duplicates.
pub fn normalize<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for word in words {
        let cleaned: String = word
            .as_ref()
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if !cleaned.is_empty() && !out.contains(&cleaned) {
            out.push(cleaned);
        }
    }
    out
}

/// Read one word per line; blank lines and `#` comments are skipped.
pub fn read_word_file(path: &Path) -> std::io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(normalize(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    ))
}
