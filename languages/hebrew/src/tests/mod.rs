use glyphic_core::dictionary::DictionaryStore;

mod pipeline_tests;

/// Build a store from `(key, value)` pairs
fn store(name: &str, entries: &[(&str, &str)]) -> DictionaryStore {
    let source: String = entries
        .iter()
        .map(|(key, value)| format!("{key}\t{value}\n"))
        .collect();
    DictionaryStore::from_source(name, &source)
}

/// Glyph table mapping each symbol to itself and its final form to `symbol*`
fn identity_glyphs(symbols: &str) -> DictionaryStore {
    let source: String = symbols
        .chars()
        .map(|c| format!("{c} {c}\n{c}(final) {c}*\n"))
        .collect();
    DictionaryStore::from_source("glyphs", &source)
}
