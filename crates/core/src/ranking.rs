//! Sort orders and the quality floor over normalized records.
//!
//! Both orders are stable: records with equal keys keep their input order,
//! so identical API responses always produce identical files.

use std::cmp::Reverse;

use crate::extract::{parse_int, Resolution};
use crate::record::TorrentRecord;

/// Minimum resolution rank kept by the quality floor (1080p-equivalent).
pub const QUALITY_FLOOR_RANK: u8 = 3;

fn int_or_zero(text: &str) -> i64 {
    parse_int(text).unwrap_or(0)
}

/// Resolution rank of a normalized record; unknown labels rank 1.
pub fn resolution_rank(record: &TorrentRecord) -> u8 {
    Resolution::from_label(&record.resolution).rank()
}

/// Order records by season, then episode, then best resolution, then most
/// seeders.
///
/// Unparseable season, episode and seeder values count as 0.
pub fn sort_by_episode(mut records: Vec<TorrentRecord>) -> Vec<TorrentRecord> {
    records.sort_by_key(|r| {
        (
            int_or_zero(&r.season),
            int_or_zero(&r.episode),
            Reverse(resolution_rank(r)),
            Reverse(int_or_zero(&r.seeders)),
        )
    });
    records
}

/// Order records by seeders, most first. Unparseable values count as 0.
pub fn sort_by_seeders(mut records: Vec<TorrentRecord>) -> Vec<TorrentRecord> {
    records.sort_by_key(|r| Reverse(int_or_zero(&r.seeders)));
    records
}

/// Whether a record meets the quality floor.
pub fn meets_quality_floor(record: &TorrentRecord) -> bool {
    resolution_rank(record) >= QUALITY_FLOOR_RANK
}

/// Keep only records at 1080p-equivalent or better.
pub fn filter_high_quality(records: Vec<TorrentRecord>) -> Vec<TorrentRecord> {
    records.into_iter().filter(meets_quality_floor).collect()
}
