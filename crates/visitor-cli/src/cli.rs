//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{list, print, show};

/// Default visitor-listing endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/visitors";

/// Browse visitor check-in records.
#[derive(Parser, Debug)]
#[command(name = "visitors")]
#[command(author, version = env!("VISITORS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Visitor-listing endpoint URL
    #[arg(long, global = true, env = "VISITORS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List visitors, optionally filtered
    List(list::ListArgs),

    /// Show one visitor's full details
    Show(show::ShowArgs),

    /// Print a visitor pass
    Print(print::PrintArgs),
}
