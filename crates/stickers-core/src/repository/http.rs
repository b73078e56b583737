//! Record source backed by a JSON document served over HTTP.

use super::StickerSetRepository;
use crate::models::{StickerConfigDocument, StickerSet};
use crate::network::{retry_async, HttpClient, RetryConfig};
use crate::settings::Settings;
use crate::{Result, StickerError};
use async_trait::async_trait;
use tracing::{error, info};
use url::Url;

/// Fetches the sticker configuration document from `Settings::config_uri`.
///
/// Falls back to the empty default set when no URI is configured, when the
/// server answers with an error status, or when the body cannot be parsed.
/// Transport failures that survive the retries are returned as errors.
#[derive(Debug, Clone)]
pub struct HttpStickerSetRepository {
    client: HttpClient,
    config_uri: Option<Url>,
    retry: RetryConfig,
}

impl HttpStickerSetRepository {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: HttpClient::with_timeout(settings.request_timeout)?,
            config_uri: settings.config_uri.clone(),
            retry: RetryConfig::default(),
        })
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn config_uri(&self) -> Option<&Url> {
        self.config_uri.as_ref()
    }
}

#[async_trait]
impl StickerSetRepository for HttpStickerSetRepository {
    async fn fetch_sticker_set(&self) -> Result<StickerSet> {
        let Some(config_uri) = &self.config_uri else {
            info!("ConfigUri was not a valid absolute URI; default sticker set will be used.");
            return Ok(StickerSet::empty_default());
        };

        let body = match retry_async(&self.retry, || self.client.get_text(config_uri)).await {
            Ok(body) => body,
            Err(StickerError::HttpStatus { status, .. }) => {
                error!("GET {} returned {}; default sticker set will be used.", config_uri, status);
                return Ok(StickerSet::empty_default());
            }
            Err(e) => return Err(e),
        };

        let document: StickerConfigDocument = match serde_json::from_str(&body) {
            Ok(document) => document,
            Err(e) => {
                error!(
                    "Response from GET {} could not be parsed properly ({}); default sticker set will be used.",
                    config_uri, e
                );
                return Ok(StickerSet::empty_default());
            }
        };

        match document.into_sticker_set() {
            Some(set) => {
                info!("Fetched {} stickers from {}", set.len(), config_uri);
                Ok(set)
            }
            None => {
                error!(
                    "Response from GET {} has no images; default sticker set will be used.",
                    config_uri
                );
                Ok(StickerSet::empty_default())
            }
        }
    }
}
