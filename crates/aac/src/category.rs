//! A named group of images and the text each one speaks

use std::fmt;

use crate::assoc::{AssociativeArray, RenderValue};
use crate::error::PageError;
use crate::page::{EditablePage, Page};

/// A single category of an AAC board.
///
/// Maps image locations to the text spoken when the image is selected.
///
/// # Example
///
/// ```
/// use aac::{Category, EditablePage, Page};
///
/// let mut food = Category::new("food");
/// food.add_item("img/food/fries.png", "french fries");
///
/// assert_eq!(food.category(), "food");
/// assert!(food.has_image("img/food/fries.png"));
/// assert_eq!(food.select("img/food/fries.png").unwrap(), "french fries");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    items: AssociativeArray<String, String>,
}

impl Category {
    /// Create an empty category. The name may be empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: AssociativeArray::new(),
        }
    }

    /// Number of images in the category.
    pub fn len(&self) -> usize {
        self.items.size()
    }

    /// Check if the category has no images.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(image location, text)` pairs in display order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .map(|(image_loc, text)| (image_loc.as_str(), text.as_str()))
    }
}

impl Page for Category {
    fn image_locs(&self) -> Vec<String> {
        self.items.keys_as_strings()
    }

    fn category(&self) -> &str {
        &self.name
    }

    fn select(&mut self, image_loc: &str) -> Result<String, PageError> {
        self.items
            .get(image_loc)
            .cloned()
            .map_err(|_| PageError::not_found(image_loc))
    }

    fn has_image(&self, image_loc: &str) -> bool {
        self.items.has_key(image_loc)
    }
}

impl EditablePage for Category {
    fn add_item(&mut self, image_loc: &str, text: &str) {
        if let Err(err) = self.items.set(image_loc.to_string(), text.to_string()) {
            tracing::warn!(
                category = %self.name,
                image_loc,
                error = %err,
                "could not add item to category"
            );
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.items)
    }
}

impl RenderValue for Category {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
