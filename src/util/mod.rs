//! Utility modules

pub mod source;

pub use source::{filename_for_display, read_lines, SourceError, MAX_FILE_SIZE};
