use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SheWell - menstrual cycle calculator with natural language and voice date input
#[derive(Debug, Parser)]
#[command(name = "shewell")]
#[command(about = "Menstrual cycle calculator with natural language and voice date input", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (if not specified, enters interactive terminal mode)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Predict the next period, ovulation date and fertile window
    #[command(alias = "calculate")]
    Predict {
        /// Last period start (YYYY-MM-DD or a phrase such as "3 days ago")
        #[arg(required = true, num_args = 1..)]
        date: Vec<String>,

        /// Cycle length in days
        #[arg(long)]
        cycle_length: Option<u32>,

        /// Day relative phrases are resolved against (YYYY-MM-DD, default: today)
        #[arg(long)]
        reference: Option<String>,

        /// Print the prediction as JSON
        #[arg(long)]
        json: bool,
    },

    /// Turn a natural language phrase into a date
    #[command(alias = "parse")]
    Interpret {
        /// Phrase to interpret, e.g. "yesterday" or "march 1st"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Day relative phrases are resolved against (YYYY-MM-DD, default: today)
        #[arg(long)]
        reference: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// View or reset configuration
    Config {
        #[command(subcommand)]
        action: ConfigActions,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigActions {
    /// Print the active configuration
    Show,

    /// Print the config file location
    Path,

    /// Overwrite the config file with defaults
    Reset,
}
