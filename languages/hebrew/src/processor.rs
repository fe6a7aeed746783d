use glyphic_config::Config;
use glyphic_core::dictionary::DictionaryStore;
use glyphic_core::error::LoadError;
use glyphic_core::language::{
    GlyphSource, IssueFlags, LookupResult, PronunciationSource, Token, Transliterator,
};
use glyphic_core::preprocess::{DefaultPreprocessor, Preprocessor};
use glyphic_core::types::{Conversion, Messages};

use crate::glyphs::GlyphMapper;
use crate::loader::DictionaryLoader;
use crate::resolver::PhoneticResolver;

/// English -> IPA -> Hebrew letters
pub struct HebrewTransliterator {
    phonetic: DictionaryStore,
    glyphs: DictionaryStore,
    messages: Messages,
}

impl HebrewTransliterator {
    pub fn new(phonetic: DictionaryStore, glyphs: DictionaryStore) -> Self {
        Self::with_messages(phonetic, glyphs, Messages::default())
    }

    pub fn with_messages(
        phonetic: DictionaryStore,
        glyphs: DictionaryStore,
        messages: Messages,
    ) -> Self {
        Self {
            phonetic,
            glyphs,
            messages,
        }
    }

    /// Load both dictionaries as configured and build the transliterator
    pub async fn from_config(config: &Config) -> Result<Self, LoadError> {
        let (phonetic, glyphs) = DictionaryLoader::load_configured(&config.dictionary).await?;
        Ok(Self::with_messages(
            phonetic,
            glyphs,
            config.messages.clone().into(),
        ))
    }

    pub fn resolver(&self) -> PhoneticResolver<'_> {
        PhoneticResolver::new(&self.phonetic)
    }

    pub fn mapper(&self) -> GlyphMapper<'_> {
        GlyphMapper::new(&self.glyphs)
    }

    /// Entry counts of the phonetic dictionary and the glyph table
    pub fn dictionary_sizes(&self) -> (usize, usize) {
        (self.phonetic.len(), self.glyphs.len())
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Resolve every token. Undefined words carry the original token text.
    fn resolve_all(&self, text: &str) -> (Vec<LookupResult>, IssueFlags) {
        resolve_tokens(&self.resolver(), text)
    }

    /// Intermediate IPA text, words joined by single spaces
    pub fn phonetic(&self, text: &str) -> String {
        let (resolved, _) = self.resolve_all(text);
        resolved
            .iter()
            .map(LookupResult::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Transliterator for HebrewTransliterator {
    fn language_code(&self) -> &str {
        "he"
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        DefaultPreprocessor.tokenize(text)
    }

    fn convert(&self, text: &str) -> Conversion {
        let (resolved, flags) = self.resolve_all(text);
        let output = map_words(&self.mapper(), &resolved);

        let diagnostics = flags.diagnostics(&self.messages);
        if !diagnostics.is_empty() {
            tracing::debug!("diagnostics: {}", diagnostics);
        }

        Conversion {
            output,
            diagnostics,
        }
    }
}

impl Default for HebrewTransliterator {
    fn default() -> Self {
        Self::new(
            DictionaryStore::new(crate::loader::PHONETIC_STORE),
            DictionaryStore::new(crate::loader::GLYPH_STORE),
        )
    }
}

fn resolve_tokens(
    source: &dyn PronunciationSource,
    text: &str,
) -> (Vec<LookupResult>, IssueFlags) {
    let mut flags = IssueFlags::default();

    let resolved = DefaultPreprocessor
        .tokenize(text)
        .into_iter()
        .map(|token| {
            let result = source.resolve(&token.normalized);
            tracing::debug!("word {}: '{}' -> {:?}", token.position, token.surface, result);
            flags.record(&result);
            match result {
                LookupResult::Undefined(_) => LookupResult::Undefined(token.surface),
                other => other,
            }
        })
        .collect();

    (resolved, flags)
}

/// Map each resolved word through the glyph table and join with spaces.
/// A multi-pronunciation word is mapped as one string, so only its last
/// symbol takes a final form.
fn map_words(glyphs: &dyn GlyphSource, resolved: &[LookupResult]) -> String {
    resolved
        .iter()
        .map(|result| glyphs.map_word(result.text()))
        .collect::<Vec<_>>()
        .join(" ")
}
