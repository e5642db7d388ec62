use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelfscope")]
#[command(about = "Browse and summarize product transparency catalogs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Config file to use instead of discovering .shelfscope.toml
    #[arg(long, global = true, env = "SHELFSCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colors and decorations
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products with search, filters and sorting
    List {
        /// Catalog snapshot (JSON array of product records)
        snapshot: PathBuf,

        /// Case-insensitive substring matched against name and category
        #[arg(short, long, default_value = "")]
        search: String,

        /// Status filter: all, active, pending or draft
        #[arg(long, default_value = "all")]
        status: String,

        /// Category filter: all or a category present in the snapshot
        #[arg(long, default_value = "all")]
        category: String,

        /// Sort field (id, productName, category, score, status, lastUpdated)
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction: asc or desc
        #[arg(long)]
        direction: Option<String>,

        /// Show at most N rows
        #[arg(short = 'n', long = "limit", visible_alias = "top")]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show every detail of one product
    Show {
        /// Catalog snapshot
        snapshot: PathBuf,

        /// Product id
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Portfolio overview, category ranking and most frequent flags
    Summary {
        /// Catalog snapshot
        snapshot: PathBuf,

        /// Number of flags to report
        #[arg(long = "top-flags")]
        top_flags: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the category filter options
    Categories {
        /// Catalog snapshot
        snapshot: PathBuf,
    },

    /// Write a default .shelfscope.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
