use std::future::Future;
use std::path::Path;

use tokio::io::BufReader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod io;
pub mod profile;
pub mod state;

use self::profile::{CONFIG_FILE, load_config};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config(Path::new(CONFIG_FILE))?;
    init_tracing(&config.log_level);
    tracing::info!("Using config from {source}");

    let state = AppState::load(config).await?;

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    run(&state, shutdown).await
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("invalid log_level {level:?}: {e}, falling back to info");
        EnvFilter::new("info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run(state: &AppState, shutdown: impl Future<Output = ()>) -> anyhow::Result<()> {
    let (phonetic, glyphs) = state.transliterator.dictionary_sizes();
    let dictionary = &state.config.dictionary;
    tracing::info!(
        "Ready: {} phonetic entries ({}), {} glyph entries ({})",
        phonetic,
        dictionary.phonetic_path.as_deref().unwrap_or("embedded"),
        glyphs,
        dictionary.glyph_path.as_deref().unwrap_or("embedded"),
    );

    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            Ok(())
        }
        result = io::convert_lines(state, input, output) => result,
    }
}
