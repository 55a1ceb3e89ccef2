//! Configuration file handling.
//!
//! The config is a small JSON document; every field is optional and
//! command-line flags take precedence over it.

use crate::error::{CliError, Result};
use gprop_core::InputFormat;
use gprop_graph::ForestPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = ".gprop";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input notation when `--format` is not given.
    pub format: InputFormat,
    /// Forest definition when `--forest` is not given.
    pub forest: ForestPolicy,
    /// Emit JSON instead of text.
    pub json: bool,
}

impl Config {
    /// Loads the config from `explicit`, or else from the first existing
    /// default location, or else falls back to defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for path in Self::default_locations() {
            if path.is_file() {
                return Self::from_file(&path);
            }
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// `./.gprop/config.json`, then `<config dir>/gprop/config.json`.
    fn default_locations() -> Vec<PathBuf> {
        let mut locations = vec![Path::new(CONFIG_DIR).join(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            locations.push(dir.join("gprop").join(CONFIG_FILE));
        }
        locations
    }

    /// Where `gprop init` writes the config for `root`.
    pub fn project_path(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }
}
