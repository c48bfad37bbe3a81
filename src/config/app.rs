// src/config/app.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

use crate::consts::{CONFIG_ENV, DEFAULT_CONFIG_FILE};
use crate::enums::BlockLayout;
use crate::error::CoreError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub addressing: Addressing,
    pub scan: Scan,
    pub report: Report,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Addressing {
    /// Digest primitive name, resolved by `ContentAddresser::from_config`
    pub algorithm: String,
    pub layout: BlockLayout,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Scan {
    pub follow_links: bool,
    pub include_hidden: bool,
    pub warn_above_bytes: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Report {
    pub pretty: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime, falling back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let Some(path) = locate() else {
            #[cfg(feature = "logging")]
            debug!("no config file found, using built-in defaults");
            return Config::default();
        };

        match load_from(&path) {
            Ok(conf) => conf,
            Err(err) => {
                #[cfg(feature = "logging")]
                warn!(path = %path.display(), %err, "unusable config, using built-in defaults");
                #[cfg(not(feature = "logging"))]
                eprintln!(
                    "Warning: {} unusable ({err}), using built-in defaults",
                    path.display()
                );
                Config::default()
            }
        }
    })
}

/// Parse one config file, surfacing IO and TOML errors
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config, CoreError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(toml::from_str(&content)?)
}

// $CIDV0_CONFIG, then ./cidv0.toml, then the user config dir
fn locate() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(env!("CARGO_PKG_NAME")).join("config.toml"))
        .filter(|path| path.exists())
}
