//! In-memory keyword index over sticker sets.
//!
//! This module provides:
//! - Keyword normalization and query splitting
//! - The sticker index with build and prefix query operations

mod query;
mod sticker_index;

pub use query::{normalize_keyword, query_words};
pub use sticker_index::{IndexMode, StickerSetIndexer};
