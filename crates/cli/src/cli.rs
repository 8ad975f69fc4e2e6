use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tac_core::TpbCategory;

#[derive(Debug, Parser)]
#[command(name = "torrent-api-clients")]
#[command(about = "Query torrent metadata APIs and export normalized CSVs", long_about = None)]
pub struct Cli {
    /// Path to a config TOML file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override output directory
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Append rows to an existing CSV
    #[arg(long, global = true)]
    pub append: bool,

    /// Do not add timestamp to filenames
    #[arg(long, global = true)]
    pub no_timestamp: bool,

    #[command(subcommand)]
    pub provider: ProviderCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProviderCommand {
    /// The Pirate Bay client
    Tpb {
        #[command(subcommand)]
        command: TpbCommand,
    },
    /// EZTV client
    Eztv {
        #[command(subcommand)]
        command: EztvCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum TpbCommand {
    /// Search TPB for HD movies or TV
    Search {
        /// Search query
        #[arg(long)]
        query: String,

        /// TPB category (HD movies or TV)
        #[arg(long, value_enum, default_value_t = CategoryArg::Movies)]
        category: CategoryArg,

        /// Max results to fetch
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}

#[derive(Debug, Subcommand)]
pub enum EztvCommand {
    /// Fetch latest EZTV torrents
    Latest {
        /// Max results to fetch
        #[arg(long, default_value_t = 50)]
        limit: u32,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Filter for 1080p+
        #[arg(long = "min-1080p")]
        min_1080p: bool,
    },
    /// Fetch torrents for a show by IMDb ID
    Show {
        /// IMDb ID (numbers only)
        #[arg(long)]
        imdb_id: String,

        /// Used for output filename
        #[arg(long, default_value = "Show")]
        show_name: String,

        /// Season number
        #[arg(long)]
        season: Option<u32>,

        /// Filter for 1080p+
        #[arg(long = "min-1080p")]
        min_1080p: bool,
    },
    /// Fetch top-seeded EZTV torrents
    Top {
        /// Batch size to scan
        #[arg(long, default_value_t = 100)]
        limit_fetch: u32,

        /// How many top items to save
        #[arg(long, default_value_t = 20)]
        top_n: usize,

        /// Filter for 1080p+
        #[arg(long = "min-1080p")]
        min_1080p: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Movies,
    Tv,
}

impl From<CategoryArg> for TpbCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Movies => TpbCategory::HdMovies,
            CategoryArg::Tv => TpbCategory::HdTv,
        }
    }
}
