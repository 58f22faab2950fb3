//! hinglish-corpus - corpus construction utilities for Hinglish text
//!
//! Bulk-loads key/value corpora, indexes word frequencies, and generates
//! respelling variations.

use clap::Parser;
use colored::Colorize;
use std::process;

use hinglish_corpus::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
