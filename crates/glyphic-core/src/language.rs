use std::fmt;

use crate::types::{Conversion, Messages};

/// Outcome of a dictionary lookup.
///
/// `Undefined` carries the probed text back unchanged so callers can echo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(String),
    /// Base value plus every alternate, already joined
    Multi(String),
    Undefined(String),
}

impl LookupResult {
    pub fn text(&self) -> &str {
        match self {
            LookupResult::Found(text)
            | LookupResult::Multi(text)
            | LookupResult::Undefined(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            LookupResult::Found(text)
            | LookupResult::Multi(text)
            | LookupResult::Undefined(text) => text,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, LookupResult::Undefined(_))
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, LookupResult::Multi(_))
    }
}

/// Conditions met while converting. None of them stop a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Issue {
    UndefinedWord,
    MultiplePronunciations,
    UndefinedSymbol,
    DictionaryNotLoaded,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Issue::UndefinedWord => "undefined word",
            Issue::MultiplePronunciations => "multiple pronunciations",
            Issue::UndefinedSymbol => "undefined symbol",
            Issue::DictionaryNotLoaded => "dictionary not loaded",
        };
        f.write_str(label)
    }
}

/// Input-wide flags behind the diagnostic string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueFlags {
    pub undefined_word: bool,
    pub multiple_pronunciations: bool,
}

impl IssueFlags {
    pub fn record(&mut self, result: &LookupResult) {
        match result {
            LookupResult::Undefined(_) => self.undefined_word = true,
            LookupResult::Multi(_) => self.multiple_pronunciations = true,
            LookupResult::Found(_) => {}
        }
    }

    pub fn diagnostics(&self, messages: &Messages) -> String {
        let mut parts = Vec::with_capacity(2);
        if self.undefined_word {
            parts.push(messages.undefined_word.as_str());
        }
        if self.multiple_pronunciations {
            parts.push(messages.multiple_pronunciations.as_str());
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    pub position: usize,
}

/// Word -> pronunciation lookup
pub trait PronunciationSource: Send + Sync {
    fn resolve(&self, word: &str) -> LookupResult;
}

/// Phonetic symbol -> glyph lookup with word-final form selection
pub trait GlyphSource: Send + Sync {
    fn map_symbol(&self, symbol: &str, is_word_final: bool) -> LookupResult;

    /// Map every symbol of a phonetic string and concatenate the glyphs.
    /// Each `char` is one symbol; only the last one is word-final.
    fn map_word(&self, phonetic: &str) -> String {
        let count = phonetic.chars().count();
        let mut buf = [0u8; 4];

        phonetic
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let symbol: &str = c.encode_utf8(&mut buf);
                self.map_symbol(symbol, i + 1 == count).into_text()
            })
            .collect()
    }
}

/// Text conversion interface for target-script implementations
pub trait Transliterator: Send + Sync {
    /// Target script identifier (ISO 639-1 code of the script's language)
    fn language_code(&self) -> &str;

    /// Break text into words
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Convert a whole input text; never fails
    fn convert(&self, text: &str) -> Conversion;
}
