//! CLI interface for hinglish-corpus
//!
//! Provides the command surface over the corpus pipelines and the variation
//! engine.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
