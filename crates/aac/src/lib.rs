//! # AAC
//!
//! A model of an Augmentative and Alternative Communication (AAC) board.
//!
//! A board has two levels. The top level shows one image per category;
//! selecting one opens the category, whose images each speak a short text
//! when selected. Boards are stored in a plain line-oriented text file.
//!
//! ## Architecture
//!
//! - **AssociativeArray**: an insertion-ordered key/value store with
//!   linear-scan lookup and explicit errors
//! - **Category**: image locations mapped to spoken text
//! - **Board**: the navigation state machine over a set of categories,
//!   with loading and saving
//! - **Page**: the capability both categories and boards expose to a UI
//!
//! Failures that a UI cannot act on (bad image locations while editing,
//! unreadable or malformed files) are reported through `tracing` and
//! otherwise ignored. Selection failures are returned as [`PageError`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assoc;
pub mod board;
pub mod category;
pub mod config;
pub mod error;
pub mod page;

// Re-export main types
pub use assoc::{ArrayKey, AssociativeArray, KeyValuePair, RenderValue, DEFAULT_CAPACITY, NULL_TOKEN};
pub use board::Board;
pub use category::Category;
pub use config::{BoardConfig, DEFAULT_EXTENSION};
pub use error::{AacError, ArrayError, FormatError, PageError, Result};
pub use page::{EditablePage, Page};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
