use glyphic_core::types::{DEFAULT_MULTI_MSG, DEFAULT_UNDEFINED_MSG, Messages};
use serde::{Deserialize, Serialize};

fn default_undefined_word() -> String {
    DEFAULT_UNDEFINED_MSG.to_string()
}

fn default_multiple_pronunciations() -> String {
    DEFAULT_MULTI_MSG.to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct MessagesConfig {
    #[serde(default = "default_undefined_word")]
    pub undefined_word: String,
    #[serde(default = "default_multiple_pronunciations")]
    pub multiple_pronunciations: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            undefined_word: default_undefined_word(),
            multiple_pronunciations: default_multiple_pronunciations(),
        }
    }
}

impl From<MessagesConfig> for Messages {
    fn from(config: MessagesConfig) -> Self {
        Messages {
            undefined_word: config.undefined_word,
            multiple_pronunciations: config.multiple_pronunciations,
        }
    }
}
