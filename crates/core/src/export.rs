//! CSV export of normalized records.

use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::record::{TorrentRecord, CSV_HEADERS};

/// Errors that can occur while writing an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Make `value` safe to use in a file name.
///
/// Runs of characters other than letters, digits, `_` and `-` become a
/// single `_`. Leading and trailing `_` are trimmed; an empty result becomes
/// `results`.
pub fn safe_filename(value: &str) -> String {
    let mut cleaned = String::with_capacity(value.len());
    let mut in_run = false;

    for c in value.chars() {
        if c.is_alphanumeric() || c == '_' || c == '-' {
            cleaned.push(c);
            in_run = false;
        } else if !in_run {
            cleaned.push('_');
            in_run = true;
        }
    }

    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        "results".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Pick the output file for `prefix` inside `output_dir`.
///
/// Appending or disabling timestamps gives a stable `prefix.csv`; otherwise
/// the current UTC time is added so runs never overwrite each other.
pub fn resolve_output_path(
    output_dir: &Path,
    prefix: &str,
    append: bool,
    timestamp: bool,
) -> PathBuf {
    if append || !timestamp {
        return output_dir.join(format!("{}.csv", prefix));
    }

    let now = Utc::now().format("%Y-%m-%d_%H-%M-%S");
    output_dir.join(format!("{}_{}.csv", prefix, now))
}

/// Write `records` to `path` and return the number of rows written.
///
/// The header row is written unless rows are appended to an existing file.
/// Parent directories are created as needed.
pub fn write_csv(
    records: &[TorrentRecord],
    path: &Path,
    append: bool,
) -> Result<usize, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_exists = path.exists();
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    let file = options.open(path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if !append || !file_exists {
        writer.write_record(CSV_HEADERS)?;
    }

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    debug!(rows = records.len(), path = %path.display(), append = append, "CSV written");
    Ok(records.len())
}
