//! Stickers Core - in-memory keyword search over sticker sets.
//!
//! The crate turns a flat, ordered list of labeled images into a keyword
//! index and answers prefix queries with identity deduplication and
//! pagination. Sticker sets come from a [`StickerSetRepository`], normally
//! the HTTP-backed one configured through [`Settings`].
//!
//! # Example
//!
//! ```rust
//! use stickers_core::{Sticker, StickerSet, StickerSetIndexer};
//! use url::Url;
//!
//! # fn main() -> stickers_core::Result<()> {
//! let image = Url::parse("https://example.com/cat.png").unwrap();
//! let set = StickerSet::new("pack", vec![Sticker::new("cat", image, ["cat", "kitty"])?]);
//!
//! let mut index = StickerSetIndexer::new();
//! index.index_sticker_set(Some(&set))?;
//!
//! let found = index.find_stickers_by_query(Some("kit"), 0, 25);
//! assert_eq!(found[0].name(), "cat");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod network;
pub mod repository;
pub mod settings;

pub use config::{AppConfig, NetworkConfig, SearchConfig};
pub use error::{Result, StickerError};
pub use index::{IndexMode, StickerSetIndexer};
pub use models::{Sticker, StickerConfigDocument, StickerEntry, StickerSet};
pub use network::{HttpClient, RetryConfig};
pub use repository::{HttpStickerSetRepository, StaticStickerSetRepository, StickerSetRepository};
pub use settings::Settings;

/// Fetch the current sticker set, index it, and run one query.
///
/// This is the per-request pipeline: every call builds a fresh index, so no
/// state is shared between requests.
pub async fn search_stickers(
    repository: &dyn StickerSetRepository,
    query: Option<&str>,
    skip: usize,
    count: usize,
) -> Result<Vec<std::sync::Arc<Sticker>>> {
    let sticker_set = repository.fetch_sticker_set().await?;

    let mut index = StickerSetIndexer::new();
    index.index_sticker_set(Some(&sticker_set))?;

    Ok(index.find_stickers_by_query(query, skip, count))
}
