use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use venture_core::config::Config;
use venture_core::journal::{self, LogSink};

#[derive(Subcommand)]
pub enum JournalSubcommand {
    /// Append a timestamped entry to the progress journal
    Add { text: String },
}

pub fn run(root: &Path, subcmd: JournalSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        JournalSubcommand::Add { text } => add(root, &text, json),
    }
}

fn add(root: &Path, text: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load configuration")?;
    let path = journal::append(root, &config, LogSink::Journal, text, None)
        .context("failed to write journal entry")?;

    if json {
        print_json(&serde_json::json!({
            "sink": LogSink::Journal,
            "path": path,
        }))?;
    } else {
        println!("Journal entry saved successfully!");
    }
    Ok(())
}
