//! Command execution: query a provider, then write the CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use tac_core::{
    resolve_output_path, safe_filename, write_csv, AppConfig, EztvClient, TorrentRecord,
    TpbCategory, TpbClient, Transport,
};

use crate::cli::{EztvCommand, ProviderCommand, TpbCommand};

/// Records to save and the file name prefix they are saved under.
#[derive(Debug)]
pub struct Export {
    pub prefix: String,
    pub records: Vec<TorrentRecord>,
}

/// Where and how the CSV is written.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub dir: PathBuf,
    pub append: bool,
    pub timestamp: bool,
}

/// Run the provider query selected on the command line.
pub async fn fetch(command: &ProviderCommand, config: &AppConfig) -> Result<Export> {
    match command {
        ProviderCommand::Tpb { command } => {
            let client = TpbClient::from_config(config).context("Failed to create TPB client")?;
            fetch_tpb(&client, command).await
        }
        ProviderCommand::Eztv { command } => {
            let client =
                EztvClient::from_config(config).context("Failed to create EZTV client")?;
            fetch_eztv(&client, command, config.min_1080p).await
        }
    }
}

async fn fetch_tpb<T: Transport>(client: &TpbClient<T>, command: &TpbCommand) -> Result<Export> {
    match command {
        TpbCommand::Search {
            query,
            category,
            limit,
        } => {
            let category = TpbCategory::from(*category);
            info!(query = %query, category = category.label(), "Searching TPB");

            let records = client
                .search_category(query, category, *limit)
                .await
                .context("TPB search failed")?;

            Ok(Export {
                prefix: tpb_prefix(category, query),
                records,
            })
        }
    }
}

/// `default_min_1080p` is the configured quality floor; the per-command flag
/// can only switch it on.
async fn fetch_eztv<T: Transport>(
    client: &EztvClient<T>,
    command: &EztvCommand,
    default_min_1080p: bool,
) -> Result<Export> {
    match command {
        EztvCommand::Latest {
            limit,
            page,
            min_1080p,
        } => {
            info!(limit = limit, page = page, "Fetching latest EZTV torrents");
            let records = client
                .get_latest(*limit, *page, *min_1080p || default_min_1080p)
                .await
                .context("EZTV latest query failed")?;

            Ok(Export {
                prefix: "eztv_latest".to_string(),
                records,
            })
        }
        EztvCommand::Show {
            imdb_id,
            show_name,
            season,
            min_1080p,
        } => {
            info!(imdb_id = %imdb_id, season = ?season, "Fetching EZTV show");
            let records = client
                .get_show_by_imdb(imdb_id, *season, *min_1080p || default_min_1080p)
                .await
                .context("EZTV show query failed")?;

            Ok(Export {
                prefix: show_prefix(show_name, *season),
                records,
            })
        }
        EztvCommand::Top {
            limit_fetch,
            top_n,
            min_1080p,
        } => {
            info!(
                limit_fetch = limit_fetch,
                top_n = top_n,
                "Fetching top-seeded EZTV torrents"
            );
            let records = client
                .get_top_seeded(*limit_fetch, *top_n, *min_1080p || default_min_1080p)
                .await
                .context("EZTV top query failed")?;

            Ok(Export {
                prefix: top_prefix(*top_n),
                records,
            })
        }
    }
}

/// Write an export and return the row count and the file written.
pub fn save(export: &Export, options: &OutputOptions) -> Result<(usize, PathBuf)> {
    if export.records.is_empty() {
        warn!(prefix = %export.prefix, "Query returned no results");
    }

    let path = resolve_output_path(
        &options.dir,
        &export.prefix,
        options.append,
        options.timestamp,
    );
    let count = write_csv(&export.records, &path, options.append)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok((count, absolute(&path)))
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn tpb_prefix(category: TpbCategory, query: &str) -> String {
    format!("tpb_{}_{}", category.label(), safe_filename(query))
}

fn show_prefix(show_name: &str, season: Option<u32>) -> String {
    let mut prefix = format!("eztv_{}", safe_filename(show_name));
    if let Some(season) = season {
        prefix.push_str(&format!("_S{:02}", season));
    }
    prefix
}

fn top_prefix(top_n: usize) -> String {
    format!("eztv_top_{}_seeded", top_n)
}
