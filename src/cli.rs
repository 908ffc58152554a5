use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "taskroi")]
#[command(about = "Rank tasks by return on investment", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a task file and print tasks ranked by ROI
    List {
        /// JSON file containing the task list
        path: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N tasks
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Plain output (no colors, ASCII borders)
        #[arg(long = "plain", env = "TASKROI_PLAIN")]
        plain: bool,
    },

    /// Compute the ROI for a single revenue / time-taken pair
    Roi {
        /// Revenue attributable to the task
        #[arg(allow_hyphen_values = true)]
        revenue: String,

        /// Time spent on the task
        #[arg(allow_hyphen_values = true)]
        time_taken: String,
    },

    /// Initialize a .taskroi.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
