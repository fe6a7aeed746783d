use std::path::{Path, PathBuf};

use glyphic_config::dictionary::DictionaryConfig;
use glyphic_core::dictionary::DictionaryStore;
use glyphic_core::error::LoadError;

pub const PHONETIC_STORE: &str = "ipa";
pub const GLYPH_STORE: &str = "hebrew";

const EMBEDDED_PHONETIC: &str = include_str!("../data/ipadict.txt");
const EMBEDDED_GLYPHS: &str = include_str!("../data/hebrewdict.txt");

/// Raw dictionary text provider
#[async_trait::async_trait]
pub trait DictionarySource: Send + Sync {
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Human readable origin used in log lines
    fn describe(&self) -> String;
}

/// Dictionary file on disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl DictionarySource for FileSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(LoadError::FileNotFound(self.path.display().to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => Err(LoadError::InvalidFormat(
                format!("{} is not valid UTF-8", self.path.display()),
            )),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Dictionary text compiled into the binary
pub struct EmbeddedSource {
    name: &'static str,
    text: &'static str,
}

impl EmbeddedSource {
    /// Starter English -> IPA dictionary
    pub fn phonetic() -> Self {
        Self {
            name: "embedded ipadict",
            text: EMBEDDED_PHONETIC,
        }
    }

    /// IPA symbol -> Hebrew letter table
    pub fn glyphs() -> Self {
        Self {
            name: "embedded hebrewdict",
            text: EMBEDDED_GLYPHS,
        }
    }
}

#[async_trait::async_trait]
impl DictionarySource for EmbeddedSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.text.to_string())
    }

    fn describe(&self) -> String {
        self.name.to_string()
    }
}

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Fetch and parse one dictionary. The returned store is complete once
    /// the future resolves.
    pub async fn load(
        name: &str,
        source: &dyn DictionarySource,
    ) -> Result<DictionaryStore, LoadError> {
        tracing::info!("{}: loading dictionary from {}...", name, source.describe());
        let text = source.fetch().await?;

        let mut store = DictionaryStore::new(name);
        let stats = store.load(&text);
        if stats.skipped > 0 {
            tracing::debug!("{}: skipped {} malformed lines", name, stats.skipped);
        }
        tracing::info!("{}: loaded {} entries", name, stats.entries);
        Ok(store)
    }

    /// Load the phonetic dictionary and the glyph table concurrently
    pub async fn load_pair(
        phonetic: &dyn DictionarySource,
        glyphs: &dyn DictionarySource,
    ) -> Result<(DictionaryStore, DictionaryStore), LoadError> {
        tokio::try_join!(
            Self::load(PHONETIC_STORE, phonetic),
            Self::load(GLYPH_STORE, glyphs),
        )
    }

    /// Load both dictionaries as configured, embedded data filling in for
    /// any path left unset
    pub async fn load_configured(
        config: &DictionaryConfig,
    ) -> Result<(DictionaryStore, DictionaryStore), LoadError> {
        let phonetic = source_for(config.phonetic_path.as_deref(), EmbeddedSource::phonetic);
        let glyphs = source_for(config.glyph_path.as_deref(), EmbeddedSource::glyphs);
        Self::load_pair(phonetic.as_ref(), glyphs.as_ref()).await
    }
}

fn source_for(path: Option<&str>, embedded: fn() -> EmbeddedSource) -> Box<dyn DictionarySource> {
    match path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(embedded()),
    }
}
