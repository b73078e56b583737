//! Record sources that supply sticker sets.
//!
//! The index never fetches anything itself. Callers pick a
//! [`StickerSetRepository`], fetch a set, and hand it to a fresh
//! [`crate::StickerSetIndexer`].

mod http;

pub use http::HttpStickerSetRepository;

use crate::models::StickerSet;
use crate::Result;
use async_trait::async_trait;

/// Source of the sticker set to search.
#[async_trait]
pub trait StickerSetRepository: Send + Sync {
    /// Fetch the current sticker set.
    ///
    /// Implementations may fall back to [`StickerSet::empty_default`] instead
    /// of failing when the configuration is unavailable.
    async fn fetch_sticker_set(&self) -> Result<StickerSet>;
}

/// Repository that always returns the same in-memory set.
#[derive(Debug, Clone)]
pub struct StaticStickerSetRepository {
    sticker_set: StickerSet,
}

impl StaticStickerSetRepository {
    pub fn new(sticker_set: StickerSet) -> Self {
        Self { sticker_set }
    }
}

impl Default for StaticStickerSetRepository {
    fn default() -> Self {
        Self::new(StickerSet::empty_default())
    }
}

#[async_trait]
impl StickerSetRepository for StaticStickerSetRepository {
    async fn fetch_sticker_set(&self) -> Result<StickerSet> {
        // Cloning the set clones Arcs, so stickers keep their identity across fetches.
        Ok(self.sticker_set.clone())
    }
}
