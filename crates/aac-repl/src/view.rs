//! Snapshot of what the board is showing

use serde::Serialize;

use aac::{Board, Page};

/// One image on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    /// Image location
    pub image_loc: String,

    /// Category name at the top level, spoken text inside a category
    pub label: String,
}

/// The page a board is showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Current category name, empty at the top level
    pub category: String,

    /// Whether the category list is shown
    pub at_top: bool,

    /// Images in display order
    pub images: Vec<ImageView>,
}

impl PageView {
    /// Capture the board's current page.
    pub fn of(board: &Board) -> Self {
        let images = match board.current_category() {
            Some(category) => category
                .items()
                .map(|(image_loc, text)| ImageView {
                    image_loc: image_loc.to_string(),
                    label: text.to_string(),
                })
                .collect(),
            None => board
                .categories()
                .iter()
                .map(|(image_loc, category)| ImageView {
                    image_loc: image_loc.clone(),
                    label: category.category().to_string(),
                })
                .collect(),
        };

        Self {
            category: board.category().to_string(),
            at_top: board.is_at_top(),
            images,
        }
    }
}
