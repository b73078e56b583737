//! Error types for the sticker search library.
//!
//! Only [`StickerError::InvalidArgument`] can come out of the index itself;
//! the remaining variants belong to the record source and settings loader.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the sticker search library.
#[derive(Debug, Error)]
pub enum StickerError {
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument { name: String, message: String },

    // Network errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for sticker operations.
pub type Result<T> = std::result::Result<T, StickerError>;

impl From<std::io::Error> for StickerError {
    fn from(err: std::io::Error) -> Self {
        StickerError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for StickerError {
    fn from(err: serde_json::Error) -> Self {
        StickerError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<reqwest::Error> for StickerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StickerError::Timeout(std::time::Duration::from_secs(0))
        } else {
            StickerError::Network {
                message: err.to_string(),
                source: Some(err),
            }
        }
    }
}

impl StickerError {
    /// Shorthand for an [`StickerError::InvalidArgument`].
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        StickerError::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        StickerError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Convert to a JSON-RPC error code.
    ///
    /// - -32602: Invalid params (invalid argument)
    /// - -32000: Network/connectivity error
    /// - -32603: Internal error
    pub fn to_rpc_error_code(&self) -> i32 {
        match self {
            StickerError::InvalidArgument { .. } => -32602,

            StickerError::Network { .. }
            | StickerError::Timeout(_)
            | StickerError::HttpStatus { .. } => -32000,

            _ => -32603,
        }
    }

    /// Whether the error is the caller's fault rather than ours.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StickerError::InvalidArgument { .. })
    }

    /// Check if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            StickerError::Network { .. } | StickerError::Timeout(_) => true,
            StickerError::HttpStatus { status, .. } => {
                matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }
}
