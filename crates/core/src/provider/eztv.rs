//! TV-episode index client.

use serde_json::Value;
use std::cmp::Reverse;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::extract::{value_as_i64, value_to_text};
use crate::normalize::normalize_items;
use crate::ranking::{filter_high_quality, sort_by_episode};
use crate::record::{Provider, TorrentRecord};

use super::http::HttpTransport;
use super::{retain_high_quality, ProviderError, Transport};

/// Page size used when listing every torrent of a show.
const SHOW_PAGE_LIMIT: u32 = 100;

/// Client for the TV-episode index.
pub struct EztvClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: String,
}

impl EztvClient<HttpTransport> {
    /// Create a client for the configured endpoint over HTTP.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        Ok(Self::new(
            HttpTransport::new(config)?,
            config.eztv_base_url.clone(),
        ))
    }
}

impl<T: Transport> EztvClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, params: &[(&str, String)]) -> Result<Vec<Value>, ProviderError> {
        let data = self.transport.get_json(&self.base_url, params).await?;
        let torrents = extract_torrents(data);
        debug!(results = torrents.len(), "EZTV fetch complete");
        Ok(torrents)
    }

    /// Most recent torrents, in the order the API returns them.
    pub async fn get_latest(
        &self,
        limit: u32,
        page: u32,
        min_1080p: bool,
    ) -> Result<Vec<TorrentRecord>, ProviderError> {
        let params = [("limit", limit.to_string()), ("page", page.to_string())];
        let items = self.fetch(&params).await?;
        let records = normalize_items(Provider::Eztv, &items);

        if min_1080p {
            return Ok(filter_high_quality(records));
        }
        Ok(records)
    }

    /// All torrents of a show, optionally narrowed to one season, in
    /// episode order.
    pub async fn get_show_by_imdb(
        &self,
        imdb_id: &str,
        season: Option<u32>,
        min_1080p: bool,
    ) -> Result<Vec<TorrentRecord>, ProviderError> {
        let params = [
            ("limit", SHOW_PAGE_LIMIT.to_string()),
            ("imdb_id", imdb_id.to_string()),
            ("page", "1".to_string()),
        ];
        let mut items = self.fetch(&params).await?;

        if let Some(season) = season {
            items.retain(|item| season_matches(item, season));
        }
        let mut records = normalize_items(Provider::Eztv, &items);
        if min_1080p {
            records = filter_high_quality(records);
        }

        Ok(sort_by_episode(records))
    }

    /// The `top_n` best-seeded torrents out of the latest `limit_fetch`.
    pub async fn get_top_seeded(
        &self,
        limit_fetch: u32,
        top_n: usize,
        min_1080p: bool,
    ) -> Result<Vec<TorrentRecord>, ProviderError> {
        let params = [("limit", limit_fetch.to_string()), ("page", "1".to_string())];
        let mut items = self.fetch(&params).await?;

        if min_1080p {
            items = retain_high_quality(items, "title");
        }

        items.sort_by_key(|item| Reverse(raw_seeds(item)));
        items.truncate(top_n);

        Ok(normalize_items(Provider::Eztv, &items))
    }
}

/// Pull the torrent list out of a response body.
///
/// Anything other than an object with a non-empty `torrents` array is an
/// empty result.
pub fn extract_torrents(data: Value) -> Vec<Value> {
    match data {
        Value::Object(mut body) => match body.remove("torrents") {
            Some(Value::Array(torrents)) => torrents,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                warn!(kind = json_kind(&other), "Unexpected torrents value in EZTV response");
                Vec::new()
            }
        },
        other => {
            warn!(kind = json_kind(&other), "Unexpected EZTV response shape");
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn raw_seeds(item: &Value) -> i64 {
    item.get("seeds").and_then(value_as_i64).unwrap_or(0)
}

fn season_matches(item: &Value, season: u32) -> bool {
    let raw = item.get("season").unwrap_or(&Value::Null);
    match value_as_i64(raw) {
        Some(n) => n == i64::from(season),
        None => value_to_text(raw) == season.to_string(),
    }
}
