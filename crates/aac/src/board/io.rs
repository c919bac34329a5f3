//! Loading boards from and saving boards to the line format

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::format::{self, Line};
use super::Board;
use crate::category::Category;
use crate::config::BoardConfig;
use crate::error::{FormatError, Result};
use crate::page::{EditablePage, Page};

/// Where item lines are going while a file is read.
enum Target {
    /// No header seen yet
    Nothing,

    /// The category stored under this image location
    Category(String),

    /// The last header could not be stored; its items are dropped
    Discard,
}

impl Board {
    /// Load a board from a file.
    ///
    /// A missing or unreadable file gives an empty board. A malformed line
    /// stops the load; everything before it is kept. Both cases are only
    /// reported as warnings.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::from_file_with_config(path, BoardConfig::default())
    }

    /// Load a board from a file with the given settings.
    pub fn from_file_with_config(path: impl AsRef<Path>, config: BoardConfig) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                let board = Self::from_reader_with_config(BufReader::new(file), config);
                tracing::debug!(
                    path = %path.display(),
                    categories = board.category_count(),
                    "loaded board"
                );
                board
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not open board file");
                Self::with_config(config)
            }
        }
    }

    /// Parse a board from the text of a board file.
    pub fn parse(text: &str) -> Self {
        Self::from_reader(text.as_bytes())
    }

    /// Read a board from any buffered reader, line by line.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        Self::from_reader_with_config(reader, BoardConfig::default())
    }

    /// Read a board from any buffered reader with the given settings.
    pub fn from_reader_with_config<R: BufRead>(mut reader: R, config: BoardConfig) -> Self {
        let mut board = Self::with_config(config);
        let mut target = Target::Nothing;

        let mut buf = Vec::new();
        let mut number = 0;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => number += 1,
                Err(err) => {
                    tracing::warn!(line = number + 1, error = %err, "could not read board file");
                    break;
                }
            }

            // Invalid UTF-8 is replaced rather than ending the load
            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            if let Err(err) = board.load_line(&line, number, &mut target) {
                tracing::warn!(
                    line = err.line(),
                    error = %err,
                    "malformed board file, ignoring the rest"
                );
                break;
            }
        }

        board
    }

    fn load_line(
        &mut self,
        line: &str,
        number: usize,
        target: &mut Target,
    ) -> std::result::Result<(), FormatError> {
        match format::parse_line(line, number)? {
            Line::Header { image_loc, name } => {
                match self
                    .categories
                    .set(image_loc.to_string(), Category::new(name))
                {
                    Ok(()) => *target = Target::Category(image_loc.to_string()),
                    Err(err) => {
                        tracing::warn!(line = number, error = %err, "could not register category");
                        *target = Target::Discard;
                    }
                }
            }
            Line::Item { image_loc, text } => match target {
                Target::Nothing => return Err(FormatError::ItemBeforeHeader { line: number }),
                Target::Category(key) => {
                    if let Ok(category) = self.categories.get_mut(key.as_str()) {
                        category.add_item(image_loc, text);
                    }
                }
                Target::Discard => {
                    tracing::debug!(line = number, image_loc, "dropping item of unregistered category");
                }
            },
        }
        Ok(())
    }
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

impl Board {
    // ═══════════════════════════════════════════════════════════════════
    // Saving
    // ═══════════════════════════════════════════════════════════════════

    /// Write every category and its items in the board file format.
    ///
    /// The default category is not written.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (image_loc, category) in self.categories.iter() {
            format::write_header(&mut writer, image_loc, category.category())?;
            for (item_loc, text) in category.items() {
                format::write_item(&mut writer, item_loc, text)?;
            }
        }
        writer.flush()
    }

    /// The board as board file text.
    pub fn to_file_string(&self) -> String {
        let mut out = Vec::new();
        if let Err(err) = self.write_to(&mut out) {
            tracing::warn!(error = %err, "could not render board");
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Save the board to `path` plus the configured extension, replacing
    /// any existing file. Returns the path written.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be created or written.
    pub fn try_write_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.config.save_path(path);
        let file = File::create(&path)?;
        self.write_to(BufWriter::new(file))?;
        tracing::debug!(
            path = %path.display(),
            categories = self.category_count(),
            "saved board"
        );
        Ok(path)
    }

    /// Save the board like [`try_write_to_file`](Board::try_write_to_file),
    /// reporting failure only as a warning.
    pub fn write_to_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(err) = self.try_write_to_file(path) {
            tracing::warn!(path = %path.display(), error = %err, "could not save board");
        }
    }
}
