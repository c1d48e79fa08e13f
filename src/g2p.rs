use tracing::debug;

use crate::lexicon::Lexicon;
use crate::num;
use crate::token::{Reading, Token};
use crate::trie::Trie;

/// Punctuation passed through segmentation as its own reading.
const PUNCTUATION: &str = "'\",.:；–—-－?!．，、。‧·…⋯《》「」（）()/:︰：;！？﹖ ﹔~～／”“⠀";

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Greedy dictionary-driven converter from Cantonese text to phonemic
/// tokens.
///
/// Owns an immutable [`Lexicon`] snapshot and the prefix index built over
/// its phrase keys. Both stay read-only for the life of the value and each
/// call allocates its own matching cursor, so `&self` calls are safe to
/// run concurrently.
pub struct G2P {
    lexicon: Lexicon,
    phrase_index: Trie,
}

impl G2P {
    /// Build a converter over a lexicon snapshot. The phrase index is
    /// derived here, once.
    pub fn new(lexicon: Lexicon) -> Self {
        let mut phrase_index = Trie::new();
        for key in lexicon.phrases.keys() {
            phrase_index.insert(key);
        }
        debug!(
            words = lexicon.words.len(),
            phrases = lexicon.phrases.len(),
            "phrase index built"
        );
        Self {
            lexicon,
            phrase_index,
        }
    }

    /// Converter over the bundled starter dictionary.
    pub fn bundled() -> Self {
        Self::new(crate::data::load_bundled())
    }

    /// Numeral pre-pass followed by segmentation: digit runs are rewritten
    /// to their spoken numeral form so they resolve through the dictionary
    /// like any other text.
    pub fn convert(&self, text: &str) -> Vec<Token> {
        self.segment(&num::replace_numerals(text))
    }

    /// Segment `text` into dictionary-resolved tokens.
    ///
    /// Characters are fed one at a time into a walk over the phrase index.
    /// While the walk can continue, characters accumulate into a chunk;
    /// the moment it cannot, the chunk resolves as a whole phrase if the
    /// dictionary has it, and character by character otherwise; a shorter
    /// phrase hiding inside a failed chunk is never recovered. The
    /// character that broke the walk then resolves on its own, and the
    /// next phrase attempt starts at the character after it. Lookups
    /// compare case-insensitively; emitted surface text keeps the original
    /// casing. Every input character ends up in exactly one token, so the
    /// token texts concatenate back to the trimmed input.
    pub fn segment(&self, text: &str) -> Vec<Token> {
        let text = text.trim();
        let mut output = Vec::new();
        let mut chunk = String::new();
        let mut cursor = self.phrase_index.cursor();

        for c in text.chars() {
            if self.phrase_index.advance(&mut cursor, fold_case(c)) {
                chunk.push(c);
                continue;
            }
            if !chunk.is_empty() {
                self.resolve_chunk(&chunk, &mut output);
                chunk.clear();
            }
            output.push(self.resolve_char(c));
            cursor.reset();
        }

        if !chunk.is_empty() {
            self.resolve_chunk(&chunk, &mut output);
        }
        output
    }

    /// Whole-chunk phrase lookup, falling back to per-character resolution.
    fn resolve_chunk(&self, chunk: &str, output: &mut Vec<Token>) {
        if let Some(reading) = self.lexicon.phrase(&chunk.to_lowercase()) {
            output.push(Token::new(chunk, Some(Reading::Phrase(reading.to_vec()))));
            return;
        }
        for c in chunk.chars() {
            output.push(self.resolve_char(c));
        }
    }

    fn resolve_char(&self, c: char) -> Token {
        if let Some(reading) = self.lexicon.word(fold_case(c)) {
            Token::new(c.to_string(), Some(Reading::Word(reading.to_vec())))
        } else if is_punctuation(c) {
            Token::new(c.to_string(), Some(Reading::Punct(c.to_string())))
        } else {
            Token::new(c.to_string(), None)
        }
    }
}

/// Single-character case fold for dictionary comparison. Characters whose
/// lowercase form is not itself a single character are left as-is.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}
