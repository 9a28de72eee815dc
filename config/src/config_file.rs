//! `$XDG_CONFIG_HOME/<app>/config.toml`: the `[env]` table and the `[graph]` table.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{GraphSettings, LoadError};

/// Directory holding per-app config: `$XDG_CONFIG_HOME` when set and non-empty, else
/// the platform config dir.
fn config_home() -> Result<PathBuf, LoadError> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => dirs::config_dir()
            .ok_or_else(|| LoadError::ConfigPath("no config directory for this platform".into())),
    }
}

/// Path of the app's `config.toml`, or `None` when it does not exist.
pub(crate) fn config_path(app_name: &str) -> Result<Option<PathBuf>, LoadError> {
    let path = config_home()?.join(app_name).join("config.toml");
    Ok(path.is_file().then_some(path))
}

#[derive(Deserialize, Default)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub(crate) env: HashMap<String, String>,
    #[serde(default)]
    pub(crate) graph: GraphSettings,
}

pub(crate) fn read(path: &Path) -> Result<ConfigFile, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// The app's config file, or an empty one when there is none.
pub(crate) fn load(app_name: &str) -> Result<ConfigFile, LoadError> {
    match config_path(app_name)? {
        Some(path) => read(&path),
        None => Ok(ConfigFile::default()),
    }
}
