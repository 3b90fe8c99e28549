//! Command-line front end for silabeo.

use clap::Parser;
use colored::Colorize;
use silabeo::cli::{execute, init_logging, Cli};
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
