//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default prefix of synthesized asset tags
pub const DEFAULT_TAG_PREFIX: &str = "SRPH";

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = ".srph.yaml";

/// SRPH configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for synthesized asset tags
    pub tag_prefix: Option<String>,

    /// Base URL of the SRPH-MIS API the payload is submitted to
    pub api_url: Option<String>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/srph/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Working directory config (./.srph.yaml)
        if let Ok(cwd) = std::env::current_dir() {
            if let Some(local) = Self::read_file(&cwd.join(LOCAL_CONFIG_FILE)) {
                config.merge(local);
            }
        }

        // 4. Environment variables
        if let Ok(prefix) = std::env::var("SRPH_TAG_PREFIX") {
            config.tag_prefix = Some(prefix);
        }
        if let Ok(url) = std::env::var("SRPH_API_URL") {
            config.api_url = Some(url);
        }

        config
    }

    /// Parse a config file, ignoring missing or malformed files
    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
                None
            }
        }
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "srph")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.tag_prefix.is_some() {
            self.tag_prefix = other.tag_prefix;
        }
        if other.api_url.is_some() {
            self.api_url = other.api_url;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Get the asset tag prefix, falling back to the built-in default
    pub fn tag_prefix(&self) -> &str {
        self.tag_prefix
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_TAG_PREFIX)
    }

    /// Full submission URL for an endpoint path, if an API is configured
    pub fn endpoint_url(&self, path: &str) -> Option<String> {
        self.api_url
            .as_deref()
            .map(|base| format!("{}{}", base.trim_end_matches('/'), path))
    }
}
