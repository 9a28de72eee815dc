//! Load configuration from XDG `config.toml` and project `.env`.
//!
//! - [`load_and_apply`]: applies `[env]` and `.env` to the process environment with
//!   priority **existing env > .env > XDG**. Meant for binaries; libraries get their
//!   settings passed in.
//! - [`load_graph_settings`]: reads the `[graph]` table (step limit, terminal marker,
//!   tool node id) with defaults for anything missing.
//!
//! ```toml
//! # ~/.config/baton/config.toml
//! [env]
//! OPENAI_API_KEY = "sk-..."
//!
//! [graph]
//! step_limit = 150
//! terminal_marker = "FINAL ANSWER"
//! tool_node_id = "call_tool"
//! ```

mod config_file;
mod dotenv;
#[cfg(feature = "tracing-init")]
mod tracing_init;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[cfg(feature = "tracing-init")]
pub use tracing_init::init_tracing;

/// Default app name: config lives in `$XDG_CONFIG_HOME/baton/config.toml`.
pub const DEFAULT_APP_NAME: &str = "baton";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("config path: {0}")]
    ConfigPath(String),
    #[error("read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config toml: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

/// `[graph]` table: run-wide settings for collaboration graphs.
///
/// Missing keys take the defaults (25 steps, `"FINAL ANSWER"`, `"call_tool"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Maximum node executions per run.
    pub step_limit: usize,
    /// Text that ends a run when an agent's message contains it.
    pub terminal_marker: String,
    /// Node id of the shared tool node.
    pub tool_node_id: String,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            step_limit: 25,
            terminal_marker: "FINAL ANSWER".to_string(),
            tool_node_id: "call_tool".to_string(),
        }
    }
}

impl GraphSettings {
    fn validate(self) -> Result<Self, LoadError> {
        if self.step_limit == 0 {
            return Err(LoadError::InvalidSetting(
                "graph.step_limit must be at least 1".into(),
            ));
        }
        if self.terminal_marker.trim().is_empty() {
            return Err(LoadError::InvalidSetting(
                "graph.terminal_marker must not be empty".into(),
            ));
        }
        if self.tool_node_id.trim().is_empty() {
            return Err(LoadError::InvalidSetting(
                "graph.tool_node_id must not be empty".into(),
            ));
        }
        Ok(self)
    }
}

/// Loads `[env]` from XDG `config.toml` and optional project `.env`, then sets environment
/// variables only for keys that are **not** already set.
///
/// When a key is missing from the process environment, the `.env` value wins over the
/// XDG one.
///
/// * `app_name`: e.g. `"baton"`, used for the XDG path `~/.config/<app_name>/config.toml`.
/// * `override_dir`: if `Some`, look for `.env` here instead of the current directory.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg_env = config_file::load(app_name)?.env;
    let dotenv = dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead)?;

    let mut merged = xdg_env;
    merged.extend(dotenv);
    for (key, value) in merged {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(&key, value);
        }
    }
    Ok(())
}

/// Reads the `[graph]` table of the app's XDG `config.toml`. No file means defaults.
pub fn load_graph_settings(app_name: &str) -> Result<GraphSettings, LoadError> {
    config_file::load(app_name)?.graph.validate()
}

/// Reads the `[graph]` table of an explicit config file, which must exist.
pub fn load_graph_settings_from(path: &Path) -> Result<GraphSettings, LoadError> {
    config_file::read(path)?.graph.validate()
}
