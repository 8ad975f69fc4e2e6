//! General torrent index client.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::normalize::normalize_items;
use crate::ranking::sort_by_seeders;
use crate::record::{Provider, TorrentRecord};

use super::http::HttpTransport;
use super::{ProviderError, TpbCategory, Transport};

/// Placeholder item name the API returns instead of an empty list.
const NO_RESULTS_NAME: &str = "No results returned";

/// Client for the general torrent index.
pub struct TpbClient<T: Transport = HttpTransport> {
    transport: T,
    base_url: String,
}

impl TpbClient<HttpTransport> {
    /// Create a client for the configured endpoint over HTTP.
    pub fn from_config(config: &AppConfig) -> Result<Self, ProviderError> {
        Ok(Self::new(
            HttpTransport::new(config)?,
            config.tpb_base_url.clone(),
        ))
    }
}

impl<T: Transport> TpbClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Raw search results, at most `limit` of them.
    pub async fn search(
        &self,
        query: &str,
        category: TpbCategory,
        limit: usize,
    ) -> Result<Vec<Value>, ProviderError> {
        let params = [("q", query.to_string()), ("cat", category.id().to_string())];
        debug!(query = query, category = category.id(), "Searching TPB");

        let data = self.transport.get_json(&self.base_url, &params).await?;
        let results = extract_results(data, limit);

        debug!(results = results.len(), "TPB search complete");
        Ok(results)
    }

    /// Normalized results for `category`, most seeded first.
    pub async fn search_category(
        &self,
        query: &str,
        category: TpbCategory,
        limit: usize,
    ) -> Result<Vec<TorrentRecord>, ProviderError> {
        let results = self.search(query, category, limit).await?;
        let records = normalize_items(Provider::Tpb, &results);
        Ok(sort_by_seeders(records))
    }

    pub async fn search_hd_movies(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<TorrentRecord>, ProviderError> {
        self.search_category(query, TpbCategory::HdMovies, limit).await
    }

    pub async fn search_hd_tv(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<TorrentRecord>, ProviderError> {
        self.search_category(query, TpbCategory::HdTv, limit).await
    }
}

/// Turn a search response body into at most `limit` raw items.
///
/// A lone object counts as a one-item list. The API's "No results returned"
/// placeholder, strings and other non-list bodies are empty results.
pub fn extract_results(data: Value, limit: usize) -> Vec<Value> {
    let mut items = match data {
        Value::Array(items) => items,
        Value::Object(item) => vec![Value::Object(item)],
        Value::String(_) => return Vec::new(),
        other => {
            warn!(body = %other, "Unexpected TPB response shape");
            return Vec::new();
        }
    };

    let placeholder = items
        .first()
        .and_then(|first| first.get("name"))
        .and_then(Value::as_str)
        == Some(NO_RESULTS_NAME);
    if placeholder {
        return Vec::new();
    }

    items.truncate(limit);
    items
}
