//! Word list loading utilities
//!
//! Custom answer pools are plain text: one word per line, `#` starts a comment.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines, `#`
/// comments and any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["lemon", "Tiger", "ZEBRA"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["LEMON", "TIGER", "ZEBRA"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["lemon", "toolong", "abc", "ab-cd", "tiger"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["LEMON", "TIGER"]);
    }

    #[test]
    fn parse_words_skips_comments_and_blanks() {
        let words = parse_words("# pool\n\napple\n  grape  \nnot-a-word\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["APPLE", "GRAPE"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lemon\nmelon").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_embedded_answers() {
        use crate::wordlists::ANSWERS;

        let words = words_from_slice(ANSWERS);
        assert_eq!(words.len(), ANSWERS.len());
    }
}
