//! Loading CSV source files
//!
//! Validates a path before reading it, checking for:
//! - Existence and read permissions
//! - Directories passed as files
//! - Size limit
//! - Binary content
//!
//! The parser only ever sees fully decoded lines; any failure here
//! stops the pipeline before parsing.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::csv::split_lines;

/// Maximum source size in bytes (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Bytes inspected when sniffing for binary content
const BINARY_SNIFF_LEN: u64 = 8192;

/// Why a source file could not be turned into lines
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    NotFound,
    PermissionDenied,
    /// A directory was given where a CSV file was expected
    IsDirectory,
    /// NUL bytes in the first few kilobytes
    BinaryFile,
    TooLarge { size_mb: f64 },
    InvalidUtf8,
    Io(String),
}

impl SourceError {
    /// Message naming the file, suitable for showing to the user
    pub fn user_message(&self, filename: &str) -> String {
        format!("Cannot read {}: {}", filename, self)
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::NotFound => "no such file",
            Self::PermissionDenied => "permission denied",
            Self::IsDirectory => "it is a directory",
            Self::BinaryFile => "it looks like a binary file",
            Self::InvalidUtf8 => "content is not UTF-8 text",
            Self::Io(msg) => msg.as_str(),
            Self::TooLarge { size_mb } => {
                return write!(
                    f,
                    "{:.1} MB exceeds the {} MB limit",
                    size_mb,
                    MAX_FILE_SIZE / (1024 * 1024)
                );
            }
        };
        f.write_str(reason)
    }
}

impl std::error::Error for SourceError {}

impl From<io::Error> for SourceError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::InvalidData => Self::InvalidUtf8,
            _ => Self::Io(e.to_string()),
        }
    }
}

/// Check that a path points at a readable file within the size limit
///
/// Does NOT sniff content; see [`is_likely_binary`].
pub fn validate_source(path: &Path) -> Result<(), SourceError> {
    let metadata = fs::metadata(path)?;

    if metadata.is_dir() {
        return Err(SourceError::IsDirectory);
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(SourceError::TooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
        });
    }

    Ok(())
}

/// Sniff the head of a file for NUL bytes
///
/// Unreadable files report `false`; the real read surfaces the error.
pub fn is_likely_binary(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };

    let mut head = Vec::new();
    match file.take(BINARY_SNIFF_LEN).read_to_end(&mut head) {
        Ok(_) => head.contains(&0),
        Err(_) => false,
    }
}

/// Validate and read a source file into lines
///
/// Lines end at `\n`, `\r` or `\r\n` (see [`split_lines`]). Blank lines
/// are kept; dropping them is the parser's job.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let result = validate_source(path).and_then(|()| {
        if is_likely_binary(path) {
            return Err(SourceError::BinaryFile);
        }
        Ok(fs::read_to_string(path)?)
    });

    match result {
        Ok(content) => {
            let lines: Vec<String> = split_lines(&content)
                .into_iter()
                .map(str::to_string)
                .collect();
            tracing::debug!("Read {} lines from {}", lines.len(), path.display());
            Ok(lines)
        }
        Err(e) => {
            tracing::warn!("Failed to load {}: {}", path.display(), e);
            Err(e)
        }
    }
}

/// Get the filename from a path for display in error messages
pub fn filename_for_display(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
