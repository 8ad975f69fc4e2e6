//! Canonical torrent record shared by every provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column order of every exported CSV file.
pub const CSV_HEADERS: [&str; 15] = [
    "Title",
    "Year",
    "Resolution",
    "Seeders",
    "Leechers",
    "Size",
    "UploadedDate",
    "Uploader",
    "ID",
    "MagnetLink",
    "Season",
    "Episode",
    "Peers",
    "ReleaseDate",
    "Source",
];

/// Upstream index that produced a record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// TV-episode index.
    Eztv,
    /// General torrent index.
    Tpb,
}

impl Provider {
    /// Tag written to the `Source` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Eztv => "eztv",
            Provider::Tpb => "tpb",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized torrent row.
///
/// Every column is text so that the CSV layout stays identical across
/// providers. Columns a provider does not fill are empty strings, never
/// absent. Field order matches [`CSV_HEADERS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Resolution")]
    pub resolution: String,
    #[serde(rename = "Seeders")]
    pub seeders: String,
    #[serde(rename = "Leechers")]
    pub leechers: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "UploadedDate")]
    pub uploaded_date: String,
    #[serde(rename = "Uploader")]
    pub uploader: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "MagnetLink")]
    pub magnet_link: String,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Episode")]
    pub episode: String,
    #[serde(rename = "Peers")]
    pub peers: String,
    #[serde(rename = "ReleaseDate")]
    pub release_date: String,
    #[serde(rename = "Source")]
    pub source: Provider,
}

impl TorrentRecord {
    /// A record with every text column empty, tagged with its provider.
    pub fn empty(source: Provider) -> Self {
        Self {
            title: String::new(),
            year: String::new(),
            resolution: String::new(),
            seeders: String::new(),
            leechers: String::new(),
            size: String::new(),
            uploaded_date: String::new(),
            uploader: String::new(),
            id: String::new(),
            magnet_link: String::new(),
            season: String::new(),
            episode: String::new(),
            peers: String::new(),
            release_date: String::new(),
            source,
        }
    }
}
