pub mod config;
pub mod export;
pub mod extract;
pub mod magnet;
pub mod normalize;
pub mod provider;
pub mod ranking;
pub mod record;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, AppConfig, ConfigError,
};
pub use export::{resolve_output_path, safe_filename, write_csv, ExportError};
pub use extract::{
    extract_resolution, extract_year, format_date_utc, format_size_bytes, is_high_quality,
    Resolution,
};
pub use magnet::build_magnet_link;
pub use normalize::{normalize_eztv_item, normalize_items, normalize_tpb_item};
pub use provider::{
    EztvClient, HttpTransport, ProviderError, TpbCategory, TpbClient, Transport,
};
pub use ranking::{filter_high_quality, sort_by_episode, sort_by_seeders};
pub use record::{Provider, TorrentRecord, CSV_HEADERS};
