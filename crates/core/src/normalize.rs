//! Provider-specific mapping of raw JSON items into [`TorrentRecord`]s.
//!
//! Normalizers never fail. A missing or malformed field becomes the
//! column's default, and non-object items produce a record of defaults.

use serde_json::Value;

use crate::extract::{
    extract_resolution, extract_year, format_date_utc, format_size_bytes, value_to_text,
};
use crate::magnet::build_magnet_link;
use crate::record::{Provider, TorrentRecord};

/// Look up `key` on a raw item, treating anything missing as `null`.
fn field<'a>(item: &'a Value, key: &str) -> &'a Value {
    item.get(key).unwrap_or(&Value::Null)
}

/// Map one TV-index torrent into a record.
///
/// Raw fields: `title`, `season`, `episode`, `seeds`, `peers`, `size_bytes`,
/// `date_released_unix`, `magnet_url`. A missing `size_bytes` counts as zero
/// bytes.
pub fn normalize_eztv_item(item: &Value) -> TorrentRecord {
    let title = value_to_text(field(item, "title"));
    let size = match item.get("size_bytes") {
        Some(raw) => format_size_bytes(raw),
        None => format_size_bytes(&Value::from(0)),
    };

    TorrentRecord {
        resolution: extract_resolution(&title).label().to_string(),
        seeders: value_to_text(field(item, "seeds")),
        peers: value_to_text(field(item, "peers")),
        size,
        release_date: format_date_utc(field(item, "date_released_unix"), true),
        magnet_link: value_to_text(field(item, "magnet_url")),
        season: value_to_text(field(item, "season")),
        episode: value_to_text(field(item, "episode")),
        title,
        ..TorrentRecord::empty(Provider::Eztv)
    }
}

/// Map one general-index torrent into a record.
///
/// Raw fields: `name`, `seeders`, `leechers`, `size`, `info_hash`, `added`,
/// `username`, `id`. The magnet link is built from `info_hash` and `name`.
pub fn normalize_tpb_item(item: &Value) -> TorrentRecord {
    let name = value_to_text(field(item, "name"));
    let info_hash = value_to_text(field(item, "info_hash"));
    let size = match item.get("size") {
        Some(raw) => format_size_bytes(raw),
        None => format_size_bytes(&Value::from("0")),
    };

    TorrentRecord {
        year: extract_year(&name),
        resolution: extract_resolution(&name).label().to_string(),
        seeders: value_to_text(field(item, "seeders")),
        leechers: value_to_text(field(item, "leechers")),
        size,
        uploaded_date: format_date_utc(field(item, "added"), false),
        uploader: value_to_text(field(item, "username")),
        id: value_to_text(field(item, "id")),
        magnet_link: build_magnet_link(&info_hash, &name),
        title: name,
        ..TorrentRecord::empty(Provider::Tpb)
    }
}

/// Normalize a batch of raw items with the normalizer for `provider`.
pub fn normalize_items(provider: Provider, items: &[Value]) -> Vec<TorrentRecord> {
    let normalize = match provider {
        Provider::Eztv => normalize_eztv_item,
        Provider::Tpb => normalize_tpb_item,
    };
    items.iter().map(normalize).collect()
}
