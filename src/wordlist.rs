// File: src/wordlist.rs
use crate::config::InvalidWordPolicy;
use crate::core::index::WordIndex;
use crate::errors::{IndexError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Counts from one word-list load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Words stored under a new letter multiset.
    pub inserted: usize,
    /// Words dropped because an anagram was already stored.
    pub duplicates: usize,
    /// Lines that could not be indexed (only under [`InvalidWordPolicy::Skip`]).
    pub skipped: usize,
}

/// Loads one word per line from `reader` into `index`.
///
/// Lines are trimmed; blank lines and `#` comments are ignored. If a line has
/// several whitespace-separated columns only the first is taken as the word.
pub fn load_words<R: BufRead>(
    index: &mut WordIndex,
    reader: R,
    policy: InvalidWordPolicy,
) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let word = match line.split_whitespace().next() {
            Some(word) if !word.starts_with('#') => word,
            _ => continue,
        };

        match index.insert(word) {
            Ok(true) => report.inserted += 1,
            Ok(false) => report.duplicates += 1,
            Err(e) if e.is_input_error() => match policy {
                InvalidWordPolicy::Skip => {
                    warn!(line = line_no + 1, word, "skipping word: {}", e);
                    report.skipped += 1;
                }
                InvalidWordPolicy::Reject => {
                    return Err(IndexError::InvalidWord { line: line_no + 1, source: Box::new(e) });
                }
            },
            Err(e) => return Err(e),
        }
    }

    debug!(?report, "word list loaded");
    Ok(report)
}

pub fn load_wordlist_file(
    index: &mut WordIndex,
    path: &Path,
    policy: InvalidWordPolicy,
) -> Result<LoadReport> {
    let file = File::open(path)?;
    let report = load_words(index, BufReader::new(file), policy)?;
    info!(
        path = %path.display(),
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped,
        "loaded word list"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const LIST: &str = "\
# sample list
women
  men
woman 1200
nemow

it's
overlong
overlonger
";

    #[test]
    fn test_skip_policy_counts() {
        let mut index = WordIndex::new();
        let report = load_words(&mut index, Cursor::new(LIST), InvalidWordPolicy::Skip).unwrap();
        assert_eq!(report, LoadReport { inserted: 4, duplicates: 1, skipped: 2 });
        assert!(index.contains("woman").unwrap());
        assert_eq!(index.get("nemow").unwrap(), Some("women"));
        assert!(index.contains("overlong").unwrap());
    }

    #[test]
    fn test_reject_policy_reports_line() {
        let mut index = WordIndex::new();
        let err = load_words(&mut index, Cursor::new(LIST), InvalidWordPolicy::Reject).unwrap_err();
        match err {
            IndexError::InvalidWord { line, source } => {
                assert_eq!(line, 7);
                assert!(matches!(*source, IndexError::InvalidSymbol('\'')));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // lines before the bad one stay loaded
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tea\neat\nate\ntee").unwrap();
        let mut index = WordIndex::new();
        let report = load_wordlist_file(&mut index, file.path(), InvalidWordPolicy::Skip).unwrap();
        assert_eq!(report.inserted, 2);
        assert_eq!(report.duplicates, 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut index = WordIndex::new();
        let err = load_wordlist_file(&mut index, Path::new("/nonexistent/words.txt"), InvalidWordPolicy::Skip)
            .unwrap_err();
        assert!(matches!(err, IndexError::Io(_)));
    }
}
