//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "hinglish-corpus")]
#[command(about = "Corpus construction utilities for Hinglish text")]
#[command(version)]
pub struct Cli {
    /// Selected subcommand.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Bulk-load a JSON key/value file into a sorted store snapshot
    GenDb {
        /// Input JSON file: one object of string/string pairs
        input: PathBuf,

        /// Output snapshot file (TSV, sorted by key)
        output: PathBuf,
    },

    /// Count word frequencies in a text file into a sorted store snapshot
    WordIndex {
        /// Input text file
        input: PathBuf,

        /// Output snapshot file (TSV, sorted by word)
        output: PathBuf,
    },

    /// Generate respelling variations for a Hinglish word
    Variate {
        /// Word to vary (ASCII lowercase letters)
        word: String,
    },
}
