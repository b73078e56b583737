//! Data models for sticker search.
//!
//! `sticker` holds the in-memory records the index works on; `config_document`
//! is the JSON shape the record source downloads.

mod config_document;
mod sticker;

pub use config_document::*;
pub use sticker::*;
