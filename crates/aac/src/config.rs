//! Board configuration

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::assoc::DEFAULT_CAPACITY;

/// Extension appended to board files on save.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Settings that control how a board is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Suffix appended (after a `.`) to the path given to `write_to_file`.
    /// Empty means the path is used as given.
    pub extension: String,

    /// Starting capacity of the board's category array
    pub initial_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl BoardConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with a custom save extension.
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            ..Default::default()
        }
    }

    /// Create a config with a custom initial category capacity.
    pub fn with_initial_capacity(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            ..Default::default()
        }
    }

    /// The path a board saved to `path` actually lands at.
    ///
    /// The extension is appended, never substituted: `board` and
    /// `board.txt` become `board.txt` and `board.txt.txt`.
    pub fn save_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let mut name = OsString::from(path.as_ref().as_os_str());
        if !self.extension.is_empty() {
            name.push(".");
            name.push(&self.extension);
        }
        PathBuf::from(name)
    }
}
