//! Wire format of the sticker configuration document.
//!
//! ```json
//! { "images": [ { "name": "cat", "imageUri": "https://...", "keywords": ["cat"] } ] }
//! ```

use super::{Sticker, StickerSet};
use crate::config::SearchConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

/// Root of the configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StickerConfigDocument {
    #[serde(default)]
    pub images: Option<Vec<StickerEntry>>,
}

/// One sticker as it appears in the configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickerEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_uri: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl StickerConfigDocument {
    /// Convert the document into a sticker set.
    ///
    /// Returns `None` when the document has no `images` array. Entries with a
    /// blank name or an image URI that is not absolute are skipped.
    pub fn into_sticker_set(self) -> Option<StickerSet> {
        let images = self.images?;
        let stickers = images.into_iter().filter_map(|entry| {
            let image_uri = match Url::parse(&entry.image_uri) {
                Ok(uri) => uri,
                Err(e) => {
                    warn!(
                        "Skipping sticker '{}': image URI '{}' is not absolute ({})",
                        entry.name, entry.image_uri, e
                    );
                    return None;
                }
            };

            match Sticker::new(entry.name, image_uri, entry.keywords) {
                Ok(sticker) => Some(sticker),
                Err(e) => {
                    warn!("Skipping sticker entry: {}", e);
                    None
                }
            }
        });

        Some(StickerSet::new(SearchConfig::FETCHED_SET_NAME, stickers))
    }
}
