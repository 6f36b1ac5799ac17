use crate::types::{OutputFormat, StatusArg, TransportArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wayfarer")]
#[command(about = "Track visited countries, trips, statistics, and visa deadlines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $WAYFARER_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Country catalog file (overrides the config entry)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set a country's status; its visit history is left untouched
    Mark {
        /// Country code (ISO 3166-1 alpha-2)
        code: String,
        status: StatusArg,
    },

    /// Add or remove visit records
    Visit {
        #[command(subcommand)]
        command: VisitCommand,
    },

    /// Chronological travel timeline, newest first
    History,

    /// Overview, region, transportation, and most-visited statistics
    Stats,

    /// Active visas ranked by urgency, plus expired ones
    Visas,

    /// Write the dataset as travel-history-<date>.csv
    Export {
        /// Output directory (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Replace the dataset from a CSV file
    Import {
        file: PathBuf,

        /// Parse and report without writing the store
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
pub enum VisitCommand {
    /// Record a visit; date precision follows the parts you supply
    Add {
        code: String,

        #[arg(long)]
        year: i32,

        #[arg(long)]
        month: Option<u32>,

        #[arg(long, requires = "month")]
        day: Option<u32>,

        #[arg(long)]
        depart_year: Option<i32>,

        #[arg(long, requires = "depart_year")]
        depart_month: Option<u32>,

        #[arg(long, requires = "depart_month")]
        depart_day: Option<u32>,

        #[arg(long)]
        transport: Option<TransportArg>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Delete a visit by id
    Remove { code: String, id: String },
}
