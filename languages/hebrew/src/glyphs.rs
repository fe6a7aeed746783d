use glyphic_core::dictionary::{DictionaryStore, VariantKey};
use glyphic_core::language::{GlyphSource, Issue, LookupResult};

/// Maps IPA symbols to Hebrew letters, preferring the `(final)` form for the
/// last symbol of a word.
pub struct GlyphMapper<'a> {
    store: &'a DictionaryStore,
}

impl<'a> GlyphMapper<'a> {
    pub fn new(store: &'a DictionaryStore) -> Self {
        Self { store }
    }

    pub fn map_symbol(&self, symbol: &str, is_word_final: bool) -> LookupResult {
        if self.store.is_empty() {
            tracing::warn!(
                "{}: {} while mapping '{}'",
                self.store.name(),
                Issue::DictionaryNotLoaded,
                symbol
            );
            return LookupResult::Undefined(symbol.to_string());
        }

        if is_word_final {
            if let Some(glyph) = self.store.probe(VariantKey::Final(symbol)) {
                return LookupResult::Found(glyph.to_string());
            }
        }

        match self.store.probe(VariantKey::Base(symbol)) {
            Some(glyph) => LookupResult::Found(glyph.to_string()),
            None => {
                tracing::debug!("{}: '{}'", Issue::UndefinedSymbol, symbol);
                LookupResult::Undefined(symbol.to_string())
            }
        }
    }
}

impl GlyphSource for GlyphMapper<'_> {
    fn map_symbol(&self, symbol: &str, is_word_final: bool) -> LookupResult {
        GlyphMapper::map_symbol(self, symbol, is_word_final)
    }
}
