use serde::{Deserialize, Serialize};

/// One segmented span of input text with its resolved pronunciation.
///
/// `reading: None` marks an unknown span: no dictionary entry and not
/// punctuation. That is distinct from a known reading that happens to
/// carry zero symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub reading: Option<Reading>,
}

/// How a span resolved against the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reading {
    /// Multi-character dictionary entry, symbols in reading order.
    Phrase(Vec<String>),
    /// Single-character dictionary entry.
    Word(Vec<String>),
    /// Punctuation echoed through as its own reading.
    Punct(String),
}

impl Token {
    pub fn new(text: impl Into<String>, reading: Option<Reading>) -> Self {
        Self {
            text: text.into(),
            reading,
        }
    }

    pub fn is_known(&self) -> bool {
        self.reading.is_some()
    }
}

impl Reading {
    /// The phonetic symbols of this reading, in order.
    pub fn symbols(&self) -> &[String] {
        match self {
            Reading::Phrase(symbols) | Reading::Word(symbols) => symbols,
            Reading::Punct(echo) => std::slice::from_ref(echo),
        }
    }
}

/// Merge the phonetic payload of a token sequence into one display string.
///
/// Present readings (punctuation echoes included) are joined with single
/// spaces; tokens without a reading contribute nothing, so filter them out
/// beforehand if a different policy is wanted. Literal slashes from
/// dictionary notation are stripped and a doubled space collapsed
/// afterwards.
pub fn flatten(tokens: &[Token]) -> String {
    let symbols: Vec<&str> = tokens
        .iter()
        .filter_map(|tk| tk.reading.as_ref())
        .flat_map(Reading::symbols)
        .map(String::as_str)
        .collect();
    symbols.join(" ").replace('/', "").replace("  ", " ")
}
