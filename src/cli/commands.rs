//! CLI commands and argument parsing

use crate::dataset::DatasetKind;
use crate::table::PageSize;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and export negotiation tournament datasets
#[derive(Parser, Debug)]
#[command(name = "tourney-view")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Viewer configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which dataset to load
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Tournament identifier
    #[arg(long)]
    pub id: String,

    /// Dataset type (details, all_scores)
    #[arg(long, default_value = "details")]
    pub dataset: DatasetKind,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a dataset and print one page of it
    Show {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Page to show (1-based)
        #[arg(long, default_value = "1")]
        page: usize,

        /// Rows per page (25, 50, 100, 250)
        #[arg(long)]
        page_size: Option<PageSize>,

        /// Field to sort by
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },

    /// Load a dataset and print its inferred columns
    Columns {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Load a dataset and write it to `{id}_{dataset}.csv`
    Export {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
