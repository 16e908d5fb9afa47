mod annual_cmd;
mod cli;
mod config;
mod convert;
mod events_cmd;
mod input;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Events(args) => events_cmd::run(args),
        Command::Annual(args) => annual_cmd::run(args),
    }
}
