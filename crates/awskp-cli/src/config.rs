use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{eyre::WrapErr, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

/// Optional user configuration loaded from `~/.config/awskp/config.toml` (platform-specific).
///
/// Region and key id are always taken from the command line.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// AWS profile used when `--profile` is not given.
    pub profile: Option<String>,
    /// Override for the SSM endpoint.
    pub endpoint_url: Option<String>,
}

/// Load config from the default path; if missing, return defaults.
pub fn load() -> Result<Config> {
    match default_path() {
        Some(path) => load_from_path(path),
        None => Ok(Config::default()),
    }
}

/// Load config from a given path; if missing or empty, return defaults.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let cfg: Config = toml::from_str(&contents)
        .wrap_err_with(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Resolve the default config path, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
    config_dir().map(|base| base.join("awskp").join("config.toml"))
}
