use std::collections::HashMap;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::LexiconError;

/// Decorative marks removed from dictionary source before parsing.
const DECORATIONS: [char; 5] = ['/', '…', '，', '？', '！'];

/// Immutable pronunciation snapshot built once from dictionary source.
///
/// Single-character spellings live in `words`, longer spellings in
/// `phrases`; the two tables are keyed independently and never merged.
/// Keys are lowercase. Reloading a dictionary builds a new snapshot
/// rather than mutating one in place.
#[derive(Debug, Default)]
pub struct Lexicon {
    pub words: HashMap<char, Vec<String>>,
    pub phrases: HashMap<String, Vec<String>>,
}

impl Lexicon {
    /// Parse dictionary source text: one `spelling<TAB>readings` entry per
    /// line, where `readings` is a `", "`-separated list of alternatives
    /// and each alternative a space-separated symbol list. Only the first
    /// alternative is kept. Bracketed annotations and decorative marks are
    /// stripped and the source lowercased before line-splitting.
    pub fn from_source(source: &str) -> Result<Self, LexiconError> {
        let annotations = Regex::new(r"\[.*?\]").unwrap();
        let cleaned = annotations.replace_all(source, "");
        let cleaned: String = cleaned
            .chars()
            .filter(|c| !DECORATIONS.contains(c))
            .collect();
        let cleaned = cleaned.to_lowercase();

        let mut words: HashMap<char, Vec<String>> = HashMap::new();
        let mut phrases: HashMap<String, Vec<String>> = HashMap::new();

        for (idx, line) in cleaned.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let (spelling, readings) =
                line.split_once('\t').ok_or_else(|| LexiconError::MissingReading {
                    line: idx + 1,
                    entry: line.to_string(),
                })?;

            let first = readings.split(", ").next().unwrap_or(readings);
            let symbols: Vec<String> = first.split_whitespace().map(str::to_string).collect();

            let mut chars = spelling.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    words.insert(c, symbols);
                }
                (Some(_), Some(_)) => {
                    phrases.insert(spelling.to_string(), symbols);
                }
                (None, _) => continue,
            }
        }

        debug!(
            words = words.len(),
            phrases = phrases.len(),
            "parsed dictionary source"
        );
        Ok(Self { words, phrases })
    }

    /// Load and parse a dictionary source file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_source(&source)
    }

    /// Reading of a single-character entry, if any.
    pub fn word(&self, c: char) -> Option<&[String]> {
        self.words.get(&c).map(Vec::as_slice)
    }

    /// Reading of a multi-character entry, if any.
    pub fn phrase(&self, key: &str) -> Option<&[String]> {
        self.phrases.get(key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.phrases.is_empty()
    }
}

/// Combine two dictionary sources into one normalized source: lines are
/// concatenated, blank lines dropped, text lowercased. Fed back through
/// [`Lexicon::from_source`], entries from `b` win over duplicates in `a`.
pub fn merge_sources(a: &str, b: &str) -> String {
    a.lines()
        .chain(b.lines())
        .filter(|line| !line.trim().is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partitions_words_and_phrases() {
        let lexicon =
            Lexicon::from_source("你\tnei5\n好\thou2\n你好\tnei5 hou2\n").unwrap();
        assert_eq!(lexicon.word('你'), Some(&["nei5".to_string()][..]));
        assert_eq!(
            lexicon.phrase("你好"),
            Some(&["nei5".to_string(), "hou2".to_string()][..])
        );
        assert!(lexicon.phrase("你").is_none());
        assert!(lexicon.word('嗎').is_none());
    }

    #[test]
    fn test_keeps_first_alternative_only() {
        let lexicon = Lexicon::from_source("長\tcoeng4, zoeng2\n").unwrap();
        assert_eq!(lexicon.word('長'), Some(&["coeng4".to_string()][..]));

        let lexicon = Lexicon::from_source("你好\tnei5 hou2, nei5 hou3\n").unwrap();
        assert_eq!(
            lexicon.phrase("你好"),
            Some(&["nei5".to_string(), "hou2".to_string()][..])
        );
    }

    #[test]
    fn test_strips_bracketed_annotations_and_decorations() {
        let lexicon = Lexicon::from_source("好[adj]！\thou2…\n").unwrap();
        assert_eq!(lexicon.word('好'), Some(&["hou2".to_string()][..]));
    }

    #[test]
    fn test_lowercases_source() {
        let lexicon = Lexicon::from_source("OK\tou1 kei1\n").unwrap();
        assert_eq!(
            lexicon.phrase("ok"),
            Some(&["ou1".to_string(), "kei1".to_string()][..])
        );
        assert!(lexicon.phrase("OK").is_none());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let lexicon = Lexicon::from_source("好\thou2\n好\thou3\n").unwrap();
        assert_eq!(lexicon.word('好'), Some(&["hou3".to_string()][..]));
    }

    #[test]
    fn test_missing_reading_is_an_error() {
        let err = Lexicon::from_source("\n\n好 hou2\n").unwrap_err();
        match err {
            LexiconError::MissingReading { line, entry } => {
                assert_eq!(line, 3);
                assert_eq!(entry, "好 hou2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let lexicon = Lexicon::from_source("你\tnei5\n\n\n好\thou2\n").unwrap();
        assert_eq!(lexicon.words.len(), 2);
    }

    #[test]
    fn test_merge_sources_normalizes() {
        let merged = merge_sources("你\tnei5\n\n", "OK\tou1 kei1\n\n好\thou2");
        assert_eq!(merged, "你\tnei5\nok\tou1 kei1\n好\thou2");

        let lexicon = Lexicon::from_source(&merged).unwrap();
        assert_eq!(lexicon.words.len(), 2);
        assert_eq!(lexicon.phrases.len(), 1);
    }

    #[test]
    fn test_merge_gives_second_source_precedence() {
        let merged = merge_sources("好\thou2", "好\thou3");
        let lexicon = Lexicon::from_source(&merged).unwrap();
        assert_eq!(lexicon.word('好'), Some(&["hou3".to_string()][..]));
    }
}
