use serde::{Deserialize, Serialize};

/// Where the two dictionaries come from. `None` uses the embedded data.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// English -> IPA dictionary
    #[serde(default)]
    pub phonetic_path: Option<String>,
    /// IPA symbol -> glyph table
    #[serde(default)]
    pub glyph_path: Option<String>,
}
