//! Provider query clients.
//!
//! Each client fetches raw JSON through a [`Transport`], normalizes every
//! item, applies the optional quality floor and returns the records in the
//! provider's sort order. Top-seeded queries filter raw titles instead, since
//! the floor must apply before the list is cut.

mod eztv;
mod http;
mod tpb;
mod types;

pub use eztv::{extract_torrents, EztvClient};
pub use http::HttpTransport;
pub use tpb::{extract_results, TpbClient};
pub use types::*;

use serde_json::Value;

use crate::extract::{is_high_quality, value_to_text};

/// Keep raw items whose `title_key` text meets the quality floor.
pub fn retain_high_quality(mut items: Vec<Value>, title_key: &str) -> Vec<Value> {
    items.retain(|item| {
        let title = item.get(title_key).map(value_to_text).unwrap_or_default();
        is_high_quality(&title)
    });
    items
}
