//! Compose-extension result cards.
//!
//! Each sticker becomes an adaptive card holding its image, with a thumbnail
//! card as the preview shown in the picker grid.

use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use stickers_core::Sticker;

pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
pub const THUMBNAIL_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.thumbnail";

/// Body returned for a compose-extension query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeExtensionResponse {
    pub compose_extension: ComposeExtensionResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeExtensionResult {
    #[serde(rename = "type")]
    pub result_type: String,
    pub attachment_layout: String,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub content_type: String,
    pub content: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Box<Attachment>>,
}

impl ComposeExtensionResponse {
    /// Grid of sticker cards, in result order.
    pub fn from_stickers(stickers: &[Arc<Sticker>]) -> Self {
        Self {
            compose_extension: ComposeExtensionResult {
                result_type: "result".to_string(),
                attachment_layout: "grid".to_string(),
                attachments: stickers.iter().map(|s| sticker_attachment(s)).collect(),
            },
        }
    }
}

/// Content card with the preview attached.
pub fn sticker_attachment(sticker: &Sticker) -> Attachment {
    Attachment {
        preview: Some(Box::new(preview_card(sticker))),
        ..content_card(sticker)
    }
}

fn content_card(sticker: &Sticker) -> Attachment {
    Attachment {
        content_type: ADAPTIVE_CARD_CONTENT_TYPE.to_string(),
        content: json!({
            "type": "AdaptiveCard",
            "version": "1.0",
            "speak": sticker.name(),
            "body": [{
                "type": "Image",
                "url": sticker.image_uri().as_str(),
                "altText": sticker.name(),
                "horizontalAlignment": "center"
            }]
        }),
        preview: None,
    }
}

fn preview_card(sticker: &Sticker) -> Attachment {
    Attachment {
        content_type: THUMBNAIL_CARD_CONTENT_TYPE.to_string(),
        content: json!({
            "title": sticker.name(),
            "images": [{
                "url": sticker.image_uri().as_str(),
                "alt": sticker.name()
            }]
        }),
        preview: None,
    }
}
