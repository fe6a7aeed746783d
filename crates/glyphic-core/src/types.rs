/// User-facing diagnostic texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub undefined_word: String,
    pub multiple_pronunciations: String,
}

pub const DEFAULT_UNDEFINED_MSG: &str =
    "Some words you have entered cannot be found in the IPA dictionary.";

pub const DEFAULT_MULTI_MSG: &str = "Some words you have entered have multiple pronunciations in english. These differences are seperated with \"OR\"";

impl Default for Messages {
    fn default() -> Self {
        Self {
            undefined_word: DEFAULT_UNDEFINED_MSG.to_string(),
            multiple_pronunciations: DEFAULT_MULTI_MSG.to_string(),
        }
    }
}

/// Result of converting one input text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Transliterated text, words joined by single spaces
    pub output: String,
    /// Advisory message, empty when every word resolved to one pronunciation
    pub diagnostics: String,
}
