//! Viewer settings.
//!
//! Defaults cover everything. To override, point `POKEDEX_VIEWER_CONFIG`
//! at a JSON file; omitted keys keep their defaults.
//!
//! ```json
//! { "leaderboard_size": 10, "placeholder": "n/a" }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable naming the optional config file.
pub const CONFIG_ENV: &str = "POKEDEX_VIEWER_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// How many entries the leaderboard lists.
    pub leaderboard_size: usize,
    /// Hide the leaderboard when fewer records than this are shown.
    pub leaderboard_min_rows: usize,
    /// Height of the records table in points.
    pub table_height: f32,
    /// Rendered in place of an absent type or evolution.
    pub placeholder: String,
    /// Initial window size, width then height.
    pub window_size: [f32; 2],
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            leaderboard_size: 5,
            leaderboard_min_rows: 5,
            table_height: 600.0,
            placeholder: "-".to_string(),
            window_size: [1200.0, 800.0],
        }
    }
}

impl ViewConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing viewer config")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Load from the file named by [`CONFIG_ENV`], falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::from_path(Path::new(&path)) {
            Ok(config) => {
                log::info!("Using viewer config from {}", Path::new(&path).display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring viewer config: {e:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ViewConfig::from_json(r#"{ "leaderboard_size": 10 }"#).unwrap();
        assert_eq!(config.leaderboard_size, 10);
        assert_eq!(config.leaderboard_min_rows, 5);
        assert_eq!(config.placeholder, "-");
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ViewConfig::from_json("{}").unwrap(), ViewConfig::default());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = ViewConfig::from_json("{ leaderboard_size: }").unwrap_err();
        assert!(format!("{err:#}").contains("parsing viewer config"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(ViewConfig::from_path(Path::new("/nonexistent/pokedex.json")).is_err());
    }
}
