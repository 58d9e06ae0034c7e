//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Campus parcel pickup store: stations, carrier groups and parcel records
#[derive(Parser, Debug)]
#[command(name = "depot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (default: $XDG_CONFIG_HOME/parceldepot/parceldepot.toml)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Seed pickup code generation for reproducible codes
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive menu (default)
    Shell,

    /// List pickup stations
    Stations,

    /// List supported carrier codes
    Carriers,

    /// Show effective configuration
    Config {
        /// Print a commented template instead
        #[arg(long)]
        template: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
