//! Network utilities for fetching the sticker configuration.
//!
//! This module provides:
//! - A thin reqwest wrapper with timeouts and status mapping
//! - Retry logic with exponential backoff and jitter

mod client;
mod retry;

pub use client::HttpClient;
pub use retry::{retry_async, RetryConfig};
