//! Command-line argument parsing for the viewer
//!
//! Supports:
//! - Choosing the CSV file to display
//! - Treating the first record as header names
//! - Text or JSON output
//! - Overriding display preferences from the config file

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::ViewerConfig;
use crate::csv::RenderOptions;

/// Display a CSV file as an aligned table
#[derive(Parser, Debug)]
#[command(name = "csvview", version, about = "Display a CSV file as an aligned table")]
pub struct CliArgs {
    /// CSV file to display
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Interpret the first record as header names
    #[arg(long, conflicts_with = "no_header")]
    pub header: bool,

    /// Use column numbers as header names, even if the config enables headers
    #[arg(long)]
    pub no_header: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Text shown for missing cells
    #[arg(long, value_name = "TEXT")]
    pub missing: Option<String>,

    /// Maximum column width in characters
    #[arg(long, value_name = "N")]
    pub max_width: Option<usize>,

    /// Hide the row number column
    #[arg(long)]
    pub no_row_numbers: bool,
}

/// How the parsed table is written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text grid
    #[default]
    Text,
    /// Pretty-printed JSON with `null` for missing cells
    Json,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// File to read
    pub path: PathBuf,
    /// Whether the first non-blank line holds header names
    pub first_row_as_header: bool,
    /// Output format
    pub format: OutputFormat,
    /// Options for text rendering
    pub render: RenderOptions,
}

impl CliArgs {
    /// Merge parsed CLI args over the persisted config
    pub fn into_config(self, config: ViewerConfig) -> Result<StartupConfig, String> {
        let first_row_as_header = if self.header {
            true
        } else if self.no_header {
            false
        } else {
            config.first_row_as_header
        };

        let mut render = config.render_options();

        if let Some(marker) = self.missing {
            render.missing_marker = marker;
        }

        if let Some(max_width) = self.max_width {
            if max_width == 0 {
                return Err("--max-width must be at least 1".to_string());
            }
            render.max_column_width = max_width;
        }

        if render.max_column_width < render.min_column_width {
            return Err(format!(
                "Maximum column width {} is below the minimum of {}",
                render.max_column_width, render.min_column_width
            ));
        }

        if self.no_row_numbers {
            render.show_row_numbers = false;
        }

        Ok(StartupConfig {
            path: self.path,
            first_row_as_header,
            format: self.format,
            render,
        })
    }
}
