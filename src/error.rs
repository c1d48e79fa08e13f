use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or parsing dictionary source data.
///
/// Segmentation itself is total: every input character resolves to a
/// phrase, word, punctuation, or unknown token, so only ingestion can fail.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read dictionary {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary line {line}: no tab-separated reading in {entry:?}")]
    MissingReading { line: usize, entry: String },
}
