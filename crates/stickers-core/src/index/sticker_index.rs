//! Keyword index for sticker sets with prefix search.

use crate::models::{Sticker, StickerSet};
use crate::{Result, StickerError};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::ops::Bound;
use std::sync::Arc;
use tracing::debug;

use super::query::{normalize_keyword, query_words};

/// What a build does with content from earlier builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexMode {
    /// Every build starts from an empty index.
    #[default]
    Replace,
    /// Builds append to whatever is already indexed.
    Accumulate,
}

/// In-memory index over one or more sticker sets.
///
/// The index keeps every sticker in indexing order, plus a map from normalized
/// keyword to the stickers carrying it. Keys are held in a `BTreeMap`, so
/// query results across keywords come out in ascending key order.
///
/// Building takes `&mut self` and querying takes `&self`; share a built index
/// behind an `Arc` if several readers need it.
#[derive(Debug, Default)]
pub struct StickerSetIndexer {
    mode: IndexMode,
    all_stickers: Vec<Arc<Sticker>>,
    keyword_map: BTreeMap<String, Vec<Arc<Sticker>>>,
}

impl StickerSetIndexer {
    /// Create an empty index that replaces its content on every build.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with an explicit build mode.
    pub fn with_mode(mode: IndexMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> IndexMode {
        self.mode
    }

    /// Number of indexed stickers, counting repeats from accumulated builds.
    pub fn len(&self) -> usize {
        self.all_stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_stickers.is_empty()
    }

    /// Number of distinct normalized keywords.
    pub fn keyword_count(&self) -> usize {
        self.keyword_map.len()
    }

    /// Index a sticker set.
    ///
    /// Fails with [`StickerError::InvalidArgument`] when no set is given.
    pub fn index_sticker_set(&mut self, sticker_set: Option<&StickerSet>) -> Result<()> {
        let sticker_set = sticker_set.ok_or_else(|| {
            StickerError::invalid_argument("sticker_set", "sticker set must not be absent")
        })?;

        if self.mode == IndexMode::Replace {
            self.all_stickers.clear();
            self.keyword_map.clear();
        }

        for sticker in sticker_set {
            self.all_stickers.push(Arc::clone(sticker));

            for keyword in sticker.keywords() {
                self.keyword_map
                    .entry(normalize_keyword(keyword))
                    .or_default()
                    .push(Arc::clone(sticker));
            }
        }

        debug!(
            "Indexed sticker set '{}' ({} stickers, {} stickers total, {} keywords)",
            sticker_set.name(),
            sticker_set.len(),
            self.all_stickers.len(),
            self.keyword_map.len()
        );

        Ok(())
    }

    /// Find stickers matching a query, one page at a time.
    ///
    /// A blank or absent query lists every indexed sticker in indexing order.
    /// Otherwise the query is split into words and a keyword matches when any
    /// word is a prefix of it. Matching buckets are visited in ascending
    /// keyword order and each sticker is returned once, at its first
    /// occurrence. The page is `[skip, skip + count)` of that sequence.
    pub fn find_stickers_by_query(
        &self,
        query: Option<&str>,
        skip: usize,
        count: usize,
    ) -> Vec<Arc<Sticker>> {
        let words = query_words(query);

        if words.is_empty() {
            return self
                .all_stickers
                .iter()
                .skip(skip)
                .take(count)
                .cloned()
                .collect();
        }

        let keys = self.matching_keywords(&words);
        let mut seen: HashSet<*const Sticker> = HashSet::new();

        let stickers: Vec<Arc<Sticker>> = keys
            .into_iter()
            .flat_map(|key| self.keyword_map[key].iter())
            .filter(|sticker| seen.insert(Arc::as_ptr(sticker)))
            .skip(skip)
            .take(count)
            .cloned()
            .collect();

        debug!(
            "Query {:?} matched {} stickers (skip {}, count {})",
            words,
            stickers.len(),
            skip,
            count
        );

        stickers
    }

    /// Keywords that start with at least one of `words`, in ascending order.
    ///
    /// Keys sharing a prefix are contiguous in the map, so each word is a
    /// range scan starting at the word itself.
    fn matching_keywords(&self, words: &[String]) -> BTreeSet<&str> {
        let mut keys = BTreeSet::new();

        for word in words {
            let range = self
                .keyword_map
                .range::<str, _>((Bound::Included(word.as_str()), Bound::Unbounded))
                .map(|(key, _)| key.as_str())
                .take_while(|key| key.starts_with(word.as_str()));
            keys.extend(range);
        }

        keys
    }
}
