//! Line format of board files
//!
//! A board file lists each category as a header line followed by its items:
//!
//! ```text
//! img/food/plate.png food
//! >img/food/fries.png french fries
//! >img/food/watermelon.png watermelon
//! img/clothing/hanger.png clothing
//! >img/clothing/collaredshirt.png collared shirt
//! ```
//!
//! Both kinds of line split on the first space: the image location comes
//! before it and the category name or spoken text is the rest of the line.

use std::io::{self, Write};

use crate::error::FormatError;

/// First character of an item line.
pub const ITEM_MARKER: char = '>';

/// One parsed line of a board file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Starts a new category
    Header {
        /// Image shown for the category at the top level
        image_loc: &'a str,
        /// Category name
        name: &'a str,
    },

    /// An image in the most recent category
    Item {
        /// Image location
        image_loc: &'a str,
        /// Text spoken when the image is selected
        text: &'a str,
    },
}

/// Parse one line. `number` is the 1-based line number used in errors.
///
/// # Errors
///
/// `MissingSeparator` if the line has no space after the image location.
/// Blank lines fall in this case too.
pub fn parse_line(line: &str, number: usize) -> Result<Line<'_>, FormatError> {
    let missing = || FormatError::MissingSeparator {
        line: number,
        content: line.to_string(),
    };

    match line.strip_prefix(ITEM_MARKER) {
        Some(rest) => {
            let (image_loc, text) = rest.split_once(' ').ok_or_else(missing)?;
            Ok(Line::Item { image_loc, text })
        }
        None => {
            let (image_loc, name) = line.split_once(' ').ok_or_else(missing)?;
            Ok(Line::Header { image_loc, name })
        }
    }
}

/// Write a category header line.
pub fn write_header<W: Write>(writer: &mut W, image_loc: &str, name: &str) -> io::Result<()> {
    writeln!(writer, "{} {}", image_loc, name)
}

/// Write an item line.
pub fn write_item<W: Write>(writer: &mut W, image_loc: &str, text: &str) -> io::Result<()> {
    writeln!(writer, "{}{} {}", ITEM_MARKER, image_loc, text)
}
