use std::collections::HashMap;
use std::fmt;

/// Key probed in a [`DictionaryStore`].
///
/// Alternate pronunciations are stored as `word(1)`, `word(2)`, ... and
/// positional glyph forms as `symbol(final)`. Probing a variant never
/// creates an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKey<'a> {
    Base(&'a str),
    Alternate(&'a str, usize),
    Final(&'a str),
}

impl fmt::Display for VariantKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantKey::Base(key) => write!(f, "{key}"),
            VariantKey::Alternate(key, n) => write!(f, "{key}({n})"),
            VariantKey::Final(key) => write!(f, "{key}(final)"),
        }
    }
}

/// Counters reported by [`DictionaryStore::load`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub entries: usize,
    pub skipped: usize,
}

/// In-memory `key -> value` dictionary built from line-oriented text.
///
/// Each line is `key<whitespace>value`. The store is filled once and only
/// read afterwards, so a shared reference can be handed to any number of
/// lookups.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    name: String,
    entries: HashMap<String, String>,
}

impl DictionaryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Build a store and load `source` into it
    pub fn from_source(name: impl Into<String>, source: &str) -> Self {
        let mut store = Self::new(name);
        store.load(source);
        store
    }

    /// Replace the contents of the store with the entries parsed from `source`.
    ///
    /// Duplicate keys keep the last value. Lines without a second field are
    /// skipped, fields past the second are ignored.
    pub fn load(&mut self, source: &str) -> LoadStats {
        self.entries.clear();
        let mut stats = LoadStats::default();

        for line in source.lines() {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some(key), Some(value)) => {
                    self.entries.insert(key.to_string(), value.to_string());
                }
                (Some(_), None) => {
                    tracing::debug!("{}: skipping line without value: {:?}", self.name, line);
                    stats.skipped += 1;
                }
                _ => {}
            }
        }

        stats.entries = self.entries.len();
        stats
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a base or variant key
    pub fn probe(&self, key: VariantKey<'_>) -> Option<&str> {
        match key {
            VariantKey::Base(key) => self.get(key),
            variant => self.get(&variant.to_string()),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
