use std::fmt;
use std::path::{Path, PathBuf};

use glyphic_config::Config;

pub const CONFIG_FILE: &str = "glyphic.json";

/// Where the running config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Load the config file if one exists, defaults otherwise.
///
/// Runs before logging is set up, so the caller logs the returned source.
pub fn load_config(path: &Path) -> anyhow::Result<(Config, ConfigSource)> {
    if path.exists() {
        let config = Config::load(path)?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    } else {
        Ok((Config::default(), ConfigSource::Defaults))
    }
}
