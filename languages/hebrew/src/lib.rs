pub mod glyphs;
pub mod loader;
pub mod processor;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use glyphs::GlyphMapper;
pub use loader::{DictionaryLoader, DictionarySource, EmbeddedSource, FileSource};
pub use processor::HebrewTransliterator;
pub use resolver::PhoneticResolver;
