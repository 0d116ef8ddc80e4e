//! Configuration types for notion-shape.
//!
//! [`Config::load`] layers an optional user file over the built-in defaults.
//! With no explicit path it looks for `~/.config/notion-shape/config.toml`
//! and silently skips it when absent. [`Config::defaults`] returns the
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[host]
skip_invalid = true

[streams.users]
transformations = ["NotionUserTransformation"]

[streams.pages]
transformations = ["NotionPageDatabaseTransformation"]

[streams.databases]
transformations = ["NotionPageDatabaseTransformation"]

[streams.blocks]
transformations = ["NotionBlocksTransformation"]

[streams.comments]
transformations = []
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub host: HostConfig,
    /// Per-stream pipelines, keyed by stream name.
    #[serde(default)]
    pub streams: BTreeMap<String, StreamConfig>,
}

/// `[host]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    /// Skip lines that are not JSON objects instead of aborting the run.
    #[serde(default = "default_skip_invalid")]
    pub skip_invalid: bool,
}

fn default_skip_invalid() -> bool { true }

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            skip_invalid: default_skip_invalid(),
        }
    }
}

/// `[streams.<name>]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamConfig {
    /// Transformation names, applied in order.
    #[serde(default)]
    pub transformations: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the defaults, then layer the user file on top.
    ///
    /// An explicit `path` must exist; the implicit per-user path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let user_file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user_file)
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Transformation names configured for `stream`.
    pub fn stream(&self, stream: &str) -> Option<&StreamConfig> {
        self.streams.get(stream)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("notion-shape")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
