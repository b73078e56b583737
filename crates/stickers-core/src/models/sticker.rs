//! Sticker records and named sticker sets.

use crate::config::SearchConfig;
use crate::{Result, StickerError};
use serde::Serialize;
use std::sync::Arc;
use url::Url;

/// A single labeled image.
///
/// Stickers are immutable once built. The index and the query results share
/// them through `Arc`, and two stickers are the same entity only when they
/// are the same allocation; equal field values do not merge them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    name: String,
    image_uri: Url,
    keywords: Vec<String>,
}

impl Sticker {
    /// Create a sticker.
    ///
    /// Fails with [`StickerError::InvalidArgument`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        image_uri: Url,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StickerError::invalid_argument(
                "name",
                "sticker name must not be empty",
            ));
        }

        Ok(Self {
            name,
            image_uri,
            keywords: keywords.into_iter().map(Into::into).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_uri(&self) -> &Url {
        &self.image_uri
    }

    /// Keywords as written by the author, before normalization.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// A named, ordered collection of stickers.
///
/// Order is the default listing order and the tie-break order for matches.
#[derive(Debug, Clone)]
pub struct StickerSet {
    name: String,
    stickers: Vec<Arc<Sticker>>,
}

impl StickerSet {
    pub fn new(name: impl Into<String>, stickers: impl IntoIterator<Item = Sticker>) -> Self {
        Self {
            name: name.into(),
            stickers: stickers.into_iter().map(Arc::new).collect(),
        }
    }

    /// Build a set from stickers that are already shared elsewhere.
    pub fn from_shared(name: impl Into<String>, stickers: Vec<Arc<Sticker>>) -> Self {
        Self {
            name: name.into(),
            stickers,
        }
    }

    /// The empty set used when no configuration can be loaded.
    pub fn empty_default() -> Self {
        Self::from_shared(SearchConfig::DEFAULT_SET_NAME, Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stickers(&self) -> &[Arc<Sticker>] {
        &self.stickers
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Sticker>> {
        self.stickers.iter()
    }
}

impl<'a> IntoIterator for &'a StickerSet {
    type Item = &'a Arc<Sticker>;
    type IntoIter = std::slice::Iter<'a, Arc<Sticker>>;

    fn into_iter(self) -> Self::IntoIter {
        self.stickers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri() -> Url {
        Url::parse("https://stickers.example.com/cat.png").unwrap()
    }

    #[test]
    fn test_new_sticker_keeps_keywords_in_order() {
        let sticker = Sticker::new("cat", uri(), ["Happy", "cat", "happy"]).unwrap();
        assert_eq!(sticker.name(), "cat");
        assert_eq!(sticker.keywords(), &["Happy", "cat", "happy"]);
        assert_eq!(sticker.image_uri().as_str(), "https://stickers.example.com/cat.png");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = Sticker::new("   ", uri(), Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, StickerError::InvalidArgument { ref name, .. } if name == "name"));
    }

    #[test]
    fn test_sticker_serializes_camel_case() {
        let sticker = Sticker::new("cat", uri(), ["cat"]).unwrap();
        let value = serde_json::to_value(&sticker).unwrap();
        assert_eq!(value["imageUri"], "https://stickers.example.com/cat.png");
        assert_eq!(value["keywords"][0], "cat");
    }

    #[test]
    fn test_default_set_is_empty() {
        let set = StickerSet::empty_default();
        assert_eq!(set.name(), "default");
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_preserves_order() {
        let set = StickerSet::new(
            "pack",
            vec![
                Sticker::new("one", uri(), ["a"]).unwrap(),
                Sticker::new("two", uri(), ["b"]).unwrap(),
            ],
        );
        let names: Vec<_> = set.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["one", "two"]);
        assert_eq!(set.len(), 2);
    }
}
