//! Configuration discovery and logging setup for the CLI

use anyhow::{Context, Result};
use menu_search::SearchConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Places searched for a configuration file, in order
const CONFIG_CANDIDATES: &[&str] = &[
    ".menu-search.toml",
    "menu-search.toml",
    ".config/menu-search.toml",
];

/// Load configuration from an explicit path, a discovered file, or defaults
pub fn load(path: Option<&Path>) -> Result<SearchConfig> {
    let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

    match config_path {
        Some(path) => SearchConfig::load(&path)
            .with_context(|| format!("Failed to load config file {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// events with `--verbose`.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(())
}
