use anyhow::Result;
use clap::Parser;
use shewell::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    shewell::init_logger(cli.verbose);
    log::debug!("Parsed command line: {:?}", cli);
    shewell::run(cli)
}
