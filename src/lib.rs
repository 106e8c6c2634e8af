//! csvview - CSV table viewer
//!
//! This crate parses CSV text into a rectangular table (headers plus
//! column-major records) and renders it for display. Ragged rows are padded
//! with absent cells, which stay distinct from empty values.

pub mod app;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::ViewerConfig;
pub use csv::{tokenize, Cell, CsvTable, RenderOptions};
