use glyphic_config::Config;
use glyphic_lang_hebrew::HebrewTransliterator;

pub struct AppState {
    pub config: Config,
    pub transliterator: HebrewTransliterator,
}

impl AppState {
    /// Await both dictionary loads before any text is converted
    pub async fn load(config: Config) -> anyhow::Result<Self> {
        let transliterator = HebrewTransliterator::from_config(&config).await?;
        Ok(Self {
            config,
            transliterator,
        })
    }
}
