//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an outliner.toml, and if present we load settings from there.
//! This provides the outline location and the default log filter.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "outliner.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from outliner.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "outline.md".to_string())]
    /// Path of the outline document, relative to the working directory.
    pub source: String,
    #[facet(default = "warn".to_string())]
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: "outline.md".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from outliner.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    ///
    /// Runs before logging is installed, so a rejected file is reported on stderr.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
            return config;
        }
        eprintln!("Ignoring {}: not a valid outliner config", path.display());
        Self::default()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
