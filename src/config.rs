//! Viewer configuration persistence
//!
//! Stores user preferences in `~/.config/csvview/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::csv::RenderOptions;

/// Viewer configuration that persists across runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Interpret the first non-blank line as header names
    #[serde(default)]
    pub first_row_as_header: bool,

    /// Text shown in place of absent cells
    #[serde(default = "default_missing_marker")]
    pub missing_marker: String,

    /// Minimum rendered column width in characters
    #[serde(default = "default_min_column_width")]
    pub min_column_width: usize,

    /// Maximum rendered column width in characters
    #[serde(default = "default_max_column_width")]
    pub max_column_width: usize,

    /// Prefix rendered rows with their 1-based number
    #[serde(default = "default_show_row_numbers")]
    pub show_row_numbers: bool,
}

fn default_missing_marker() -> String {
    "missing".to_string()
}

fn default_min_column_width() -> usize {
    4
}

fn default_max_column_width() -> usize {
    40
}

fn default_show_row_numbers() -> bool {
    true
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            first_row_as_header: false,
            missing_marker: default_missing_marker(),
            min_column_width: default_min_column_width(),
            max_column_width: default_max_column_width(),
            show_row_numbers: default_show_row_numbers(),
        }
    }
}

impl ViewerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Rendering options derived from this config
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            missing_marker: self.missing_marker.clone(),
            min_column_width: self.min_column_width,
            max_column_width: self.max_column_width,
            show_row_numbers: self.show_row_numbers,
        }
    }
}
