//! Configuration loading and management.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::Result;

/// Standard configuration file names to search for.
const CONFIG_FILES: &[&str] = &["ravel.toml", ".ravel.toml"];

/// Default expansion depth limit.
const DEFAULT_MAX_DEPTH: usize = 128;

/// Tool configuration.
///
/// Every field has a default, so an absent or empty config file behaves like
/// `Config::default()`. CLI flags override these values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default code syntax tag for weaving, used when neither a chunk nor
    /// the document directive declares one.
    #[serde(default)]
    pub syntax: Option<String>,

    /// Generate anchor links in woven output.
    #[serde(default)]
    pub add_links: bool,

    /// Maximum reference nesting during tangle.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Error on chunks left open at end of input.
    #[serde(default)]
    pub strict: bool,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            syntax: None,
            add_links: false,
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }
}

/// Finds the configuration file in the given directory or its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Reads configuration from a TOML file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Reads configuration, searching from the given directory.
///
/// If no config file is found, returns the default configuration.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            read_config_file(&path)
        }
        None => Ok(Config::default()),
    }
}
