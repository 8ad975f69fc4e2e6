//! Testing utilities: a scripted transport and raw payload fixtures.
//!
//! # Example
//!
//! ```rust,ignore
//! use tac_core::testing::{fixtures, MockTransport};
//! use tac_core::EztvClient;
//!
//! let transport = MockTransport::new();
//! transport.push_response(fixtures::eztv_payload(vec![
//!     fixtures::eztv_torrent("Show S01E01 1080p", "1", "1", 10),
//! ]));
//!
//! let client = EztvClient::new(transport.clone(), "http://eztv.test/api");
//! let records = client.get_latest(50, 1, false).await?;
//! assert_eq!(transport.recorded_requests().len(), 1);
//! ```

mod mock_transport;

pub use mock_transport::{MockTransport, RecordedRequest};

/// Raw provider items shaped like real API responses.
pub mod fixtures {
    use serde_json::{json, Value};

    /// One TV-index torrent. Size and release date are fixed.
    pub fn eztv_torrent(title: &str, season: &str, episode: &str, seeds: u32) -> Value {
        json!({
            "id": 100000 + seeds,
            "hash": format!("{:040x}", seeds),
            "filename": format!("{}.mkv", title),
            "title": title,
            "season": season,
            "episode": episode,
            "seeds": seeds,
            "peers": seeds / 2,
            "size_bytes": "1073741824",
            "date_released_unix": 1700000000,
            "magnet_url": format!("magnet:?xt=urn:btih:{:040x}", seeds),
            "imdb_id": "0903747"
        })
    }

    /// A TV-index response body wrapping `torrents`.
    pub fn eztv_payload(torrents: Vec<Value>) -> Value {
        json!({
            "torrents_count": torrents.len(),
            "limit": 100,
            "page": 1,
            "torrents": torrents
        })
    }

    /// One general-index search result. Numbers are strings, as the API
    /// sends them.
    pub fn tpb_torrent(name: &str, seeders: u32, info_hash: &str) -> Value {
        json!({
            "id": format!("{}", 5000000 + seeders),
            "name": name,
            "info_hash": info_hash,
            "leechers": format!("{}", seeders / 3),
            "seeders": seeders.to_string(),
            "num_files": "1",
            "size": "2147483648",
            "username": "uploader",
            "added": "1577836800",
            "status": "member",
            "category": "207",
            "imdb": ""
        })
    }

    /// The general index's placeholder for an empty search.
    pub fn tpb_no_results() -> Value {
        json!([{
            "id": "0",
            "name": "No results returned",
            "info_hash": "0000000000000000000000000000000000000000",
            "leechers": "0",
            "seeders": "0",
            "num_files": "0",
            "size": "0",
            "username": "",
            "added": "0",
            "status": "member",
            "category": "0",
            "imdb": ""
        }])
    }
}
