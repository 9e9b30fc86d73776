mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use dive_cli::{SystemOpener, TutorialCommand, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.quiet);
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tutorial => execute_tutorial(),
    }
}

fn execute_tutorial() -> Result<()> {
    // clap already rejected positional arguments, so none are forwarded
    TutorialCommand::execute(&[], &SystemOpener)?;
    Ok(())
}
