//! The page capability shared by categories and boards

use crate::error::PageError;

/// Something that shows a set of selectable images.
///
/// Both a single [`Category`](crate::Category) and the whole
/// [`Board`](crate::Board) are pages, so a UI loop can drive either one the
/// same way.
pub trait Page {
    /// Image locations selectable on this page, in display order.
    ///
    /// Empty when there is nothing to show.
    fn image_locs(&self) -> Vec<String>;

    /// Name of the category currently shown, or `""` for none.
    fn category(&self) -> &str;

    /// Select an image and return the text to speak.
    ///
    /// An empty string means the selection changed what is shown rather
    /// than producing speech.
    ///
    /// # Errors
    ///
    /// `NotFound` if the image is not on this page.
    fn select(&mut self, image_loc: &str) -> Result<String, PageError>;

    /// Check if the image is selectable on this page.
    fn has_image(&self, image_loc: &str) -> bool;
}

/// A page that accepts new image/text items.
pub trait EditablePage: Page {
    /// Add an image with its spoken text.
    ///
    /// Invalid image locations are reported as diagnostics, never returned
    /// to the caller.
    fn add_item(&mut self, image_loc: &str, text: &str);
}
