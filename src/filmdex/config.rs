use crate::commands::sort::SortKey;
use crate::error::{FilmdexError, Result};
use crate::model::{Attribute, ViewMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`FilmdexConfig::get_key`] and [`FilmdexConfig::set_key`].
pub const CONFIG_KEYS: [&str; 4] = ["default-sort", "default-view", "filters", "dataset"];

/// Configuration for filmdex, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilmdexConfig {
    /// Sort applied when a session starts (unsorted when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortKey>,

    /// Layout used when a session starts
    #[serde(default)]
    pub default_view: ViewMode,

    /// Attributes offered as checkbox filters, in display order
    #[serde(default = "default_filters")]
    pub filters: Vec<Attribute>,

    /// JSON dataset to load instead of the bundled catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
}

fn default_filters() -> Vec<Attribute> {
    vec![Attribute::Director, Attribute::Producer]
}

impl Default for FilmdexConfig {
    fn default() -> Self {
        Self {
            default_sort: None,
            default_view: ViewMode::default(),
            filters: default_filters(),
            dataset: None,
        }
    }
}

impl FilmdexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FilmdexError::Io)?;
        let config: FilmdexConfig =
            serde_json::from_str(&content).map_err(FilmdexError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FilmdexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FilmdexError::Serialization)?;
        fs::write(config_path, content).map_err(FilmdexError::Io)?;
        Ok(())
    }

    /// Current value of `key` as displayed to the user.
    pub fn get_key(&self, key: &str) -> Result<String> {
        let value = match key {
            "default-sort" => self
                .default_sort
                .map(|k| k.to_string())
                .unwrap_or_else(|| "none".to_string()),
            "default-view" => self.default_view.to_string(),
            "filters" => self
                .filters
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(","),
            "dataset" => self
                .dataset
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "bundled".to_string()),
            other => return Err(FilmdexError::Config(format!("Unknown config key: {}", other))),
        };
        Ok(value)
    }

    /// Parse `value` and store it under `key`.
    ///
    /// `none` clears `default-sort`, `bundled` clears `dataset`, and
    /// `filters` takes a comma-separated attribute list (duplicates dropped).
    pub fn set_key(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-sort" => {
                self.default_sort = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.parse().map_err(FilmdexError::Config)?)
                };
            }
            "default-view" => {
                self.default_view = value.parse().map_err(FilmdexError::Config)?;
            }
            "filters" => {
                let mut filters = Vec::new();
                for name in value.split(',').filter(|s| !s.trim().is_empty()) {
                    let attr: Attribute = name.parse().map_err(FilmdexError::Config)?;
                    if !filters.contains(&attr) {
                        filters.push(attr);
                    }
                }
                self.filters = filters;
            }
            "dataset" => {
                self.dataset = if value == "bundled" {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(FilmdexError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
