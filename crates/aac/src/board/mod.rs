//! Two-level AAC board: categories at the top, items inside each category

pub mod format;
mod io;

use crate::assoc::AssociativeArray;
use crate::category::Category;
use crate::config::BoardConfig;
use crate::error::PageError;
use crate::page::{EditablePage, Page};

/// Which page the board is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Current {
    /// The category list; the board's default category is current
    Top,

    /// Inside the category stored under this image location
    Category(String),
}

/// An AAC board with two levels of navigation.
///
/// At the top level the board shows one image per category. Selecting a
/// category image moves into that category; selecting an item image there
/// returns the text to speak. [`reset`](Board::reset) goes back to the top.
///
/// # Example
///
/// ```
/// use aac::{Board, Page};
///
/// let mut board = Board::parse("img/food/plate.png food\n>img/food/fries.png fries\n");
///
/// assert_eq!(board.image_locs(), vec!["img/food/plate.png"]);
/// assert_eq!(board.select("img/food/plate.png").unwrap(), "");
/// assert_eq!(board.category(), "food");
/// assert_eq!(board.select("img/food/fries.png").unwrap(), "fries");
///
/// board.reset();
/// assert!(board.is_at_top());
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    /// Categories keyed by the image shown for them at the top level
    categories: AssociativeArray<String, Category>,

    /// Unnamed category that is current while at the top level
    default_category: Category,

    current: Current,

    config: BoardConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with default settings.
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Create an empty board with the given settings.
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            categories: AssociativeArray::with_capacity(config.initial_capacity),
            default_category: Category::new(""),
            current: Current::Top,
            config,
        }
    }

    /// The board's settings.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// All categories, keyed by their top-level image.
    pub fn categories(&self) -> &AssociativeArray<String, Category> {
        &self.categories
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.categories.size()
    }

    /// The unnamed category current at the top level.
    ///
    /// Items added at the top level land here as well as becoming new
    /// categories. It is never saved and is replaced on every reset and
    /// whenever a category is entered.
    pub fn default_category(&self) -> &Category {
        &self.default_category
    }

    /// Check if the board is showing the category list.
    pub fn is_at_top(&self) -> bool {
        self.current == Current::Top
    }

    /// The category being shown, or `None` at the top level.
    pub fn current_category(&self) -> Option<&Category> {
        match &self.current {
            Current::Top => None,
            Current::Category(key) => self.categories.get(key.as_str()).ok(),
        }
    }

    /// Go back to the top level with a fresh default category.
    ///
    /// The category that was being shown is left as it is.
    pub fn reset(&mut self) {
        tracing::trace!("board reset to top level");
        self.default_category = Category::new("");
        self.current = Current::Top;
    }

    fn current(&self) -> &Category {
        match &self.current {
            Current::Top => &self.default_category,
            Current::Category(key) => match self.categories.get(key.as_str()) {
                Ok(category) => category,
                Err(_) => &self.default_category,
            },
        }
    }

    fn current_mut(&mut self) -> &mut Category {
        match &self.current {
            Current::Top => &mut self.default_category,
            Current::Category(key) => match self.categories.get_mut(key.as_str()) {
                Ok(category) => category,
                Err(_) => &mut self.default_category,
            },
        }
    }
}

impl Page for Board {
    fn image_locs(&self) -> Vec<String> {
        match self.current {
            Current::Top => self.categories.keys_as_strings(),
            Current::Category(_) => self.current().image_locs(),
        }
    }

    fn category(&self) -> &str {
        match self.current {
            Current::Top => "",
            Current::Category(_) => self.current().category(),
        }
    }

    fn select(&mut self, image_loc: &str) -> Result<String, PageError> {
        if self.is_at_top() {
            if !self.categories.has_key(image_loc) {
                return Err(PageError::not_found(image_loc));
            }
            tracing::trace!(image_loc, "entering category");
            self.default_category = Category::new("");
            self.current = Current::Category(image_loc.to_string());
            return Ok(String::new());
        }

        let category = self.current_mut();
        if !category.has_image(image_loc) {
            return Err(PageError::not_found(image_loc));
        }
        category.select(image_loc)
    }

    fn has_image(&self, image_loc: &str) -> bool {
        match self.current {
            Current::Top => self.categories.has_key(image_loc),
            Current::Category(_) => self.current().has_image(image_loc),
        }
    }
}

impl EditablePage for Board {
    /// Add an item to the page being shown.
    ///
    /// At the top level this registers a new, empty category named `text`
    /// under `image_loc`, replacing any category already there. The item is
    /// then also added to the current category, which at the top level is
    /// the default category.
    fn add_item(&mut self, image_loc: &str, text: &str) {
        if self.is_at_top() {
            if let Err(err) = self
                .categories
                .set(image_loc.to_string(), Category::new(text))
            {
                tracing::warn!(image_loc, error = %err, "could not register category");
            }
        }
        self.current_mut().add_item(image_loc, text);
    }
}
