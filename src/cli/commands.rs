//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::corpus::indexer::{decode_count, index_words};
use crate::corpus::loader::load_json_pairs;
use crate::corpus::store::MemoryStore;
use crate::variation::engine::variations;
use crate::variation::rules::hinglish_rules;

use super::args::Commands;

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::GenDb { input, output } => cmd_gen_db(&input, &output),
        Commands::WordIndex { input, output } => cmd_word_index(&input, &output),
        Commands::Variate { word } => cmd_variate(&word),
    }
}

fn cmd_gen_db(input: &Path, output: &Path) -> Result<()> {
    let file = File::open(input)
        .with_context(|| format!("could not open input file {}", input.display()))?;

    let mut store = MemoryStore::new();
    let count = load_json_pairs(BufReader::new(file), &mut store)
        .with_context(|| format!("could not load key/value pairs from {}", input.display()))?;

    let mut writer = snapshot_writer(output)?;
    for (key, value) in store.iter() {
        writeln!(
            writer,
            "{}\t{}",
            String::from_utf8_lossy(key),
            String::from_utf8_lossy(value)
        )?;
    }
    writer.flush()?;

    println!(
        "{} entries stored in {}",
        count.to_string().green().bold(),
        output.display()
    );
    Ok(())
}

fn cmd_word_index(input: &Path, output: &Path) -> Result<()> {
    let file = File::open(input)
        .with_context(|| format!("could not open input file {}", input.display()))?;

    let mut store = MemoryStore::new();
    let summary = index_words(BufReader::new(file), &mut store)
        .with_context(|| format!("could not index words from {}", input.display()))?;

    let mut writer = snapshot_writer(output)?;
    for (key, value) in store.iter() {
        let count = decode_count(value).unwrap_or(0);
        writeln!(writer, "{}\t{}", String::from_utf8_lossy(key), count)?;
    }
    writer.flush()?;

    println!(
        "{} distinct words indexed ({} tokens) in {}",
        summary.distinct_words.to_string().green().bold(),
        summary.total_tokens,
        output.display()
    );
    Ok(())
}

fn cmd_variate(word: &str) -> Result<()> {
    let variants = variations(&hinglish_rules(), word)
        .with_context(|| format!("could not generate variations for `{word}`"))?;

    println!(
        "{} variation(s) for {}",
        variants.len().to_string().green().bold(),
        word.cyan()
    );
    for variant in &variants {
        println!("  {variant}");
    }
    Ok(())
}

fn snapshot_writer(output: &Path) -> Result<BufWriter<File>> {
    let file = File::create(output)
        .with_context(|| format!("could not create output file {}", output.display()))?;
    Ok(BufWriter::new(file))
}
