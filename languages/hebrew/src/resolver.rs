use glyphic_core::dictionary::{DictionaryStore, VariantKey};
use glyphic_core::language::{Issue, LookupResult, PronunciationSource};

/// Highest alternate index a pronouncing dictionary carries (`word(3)`)
pub const MAX_ALTERNATES: usize = 3;

pub const ALTERNATE_SEPARATOR: &str = " OR ";

/// Resolves a normalized English word into its IPA pronunciations.
///
/// Alternates are expected to be numbered densely from 1: probing stops at
/// the first missing index, so a dictionary holding `word(2)` without
/// `word(1)` reports only the base pronunciation.
pub struct PhoneticResolver<'a> {
    store: &'a DictionaryStore,
}

impl<'a> PhoneticResolver<'a> {
    pub fn new(store: &'a DictionaryStore) -> Self {
        Self { store }
    }

    pub fn resolve(&self, word: &str) -> LookupResult {
        if self.store.is_empty() {
            tracing::warn!(
                "{}: {} while resolving '{}'",
                self.store.name(),
                Issue::DictionaryNotLoaded,
                word
            );
            return LookupResult::Undefined(word.to_string());
        }

        let Some(base) = self.store.probe(VariantKey::Base(word)) else {
            tracing::debug!("{}: '{}'", Issue::UndefinedWord, word);
            return LookupResult::Undefined(word.to_string());
        };

        let mut text = base.to_string();
        let mut multi = false;

        for n in 1..=MAX_ALTERNATES {
            match self.store.probe(VariantKey::Alternate(word, n)) {
                Some(alternate) => {
                    text.push_str(ALTERNATE_SEPARATOR);
                    text.push_str(alternate);
                    multi = true;
                }
                None => break,
            }
        }

        if multi {
            LookupResult::Multi(text)
        } else {
            LookupResult::Found(text)
        }
    }
}

impl PronunciationSource for PhoneticResolver<'_> {
    fn resolve(&self, word: &str) -> LookupResult {
        PhoneticResolver::resolve(self, word)
    }
}
