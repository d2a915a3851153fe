//! # shewell
//!
//! Menstrual cycle prediction with natural language and voice date input.
//!
//! - [`cycle`]: next period, ovulation and fertile window from the last period start
//! - [`parser`]: "yesterday", "3 days ago", "march 1st" → calendar date
//! - [`speech`]: recognition and synthesis capabilities behind small traits
//! - [`state`] / [`session`]: calculator view state, reducer and its driver
//! - [`app`] / [`cli`] / [`command_processor`]: terminal front end

pub mod app;
pub mod cli;
pub mod command_processor;
pub mod config;
pub mod cycle;
pub mod date;
pub mod error;
pub mod parser;
pub mod report;
pub mod session;
pub mod speech;
pub mod state;

use anyhow::Result;
use log::*;

pub fn run(cli: cli::Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!("Loaded configuration: {:?}", config);
    let app = app::Application::new(config, cli.config.clone());
    info!("Initializing SheWell application");
    app.run(cli.command)
}

pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use cycle::{predict, CycleCalculator, CyclePrediction};
pub use date::CalendarDate;
pub use error::CycleError;
pub use parser::{interpret, ParsedDate, VoiceDateInterpreter};
