use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use venture_core::config::Config;
use venture_core::journal::{self, LogSink};

#[derive(Subcommand)]
pub enum FeedbackSubcommand {
    /// Append a timestamped feedback record
    Add {
        text: String,
        /// Author name (defaults to the configured user name)
        #[arg(long)]
        by: Option<String>,
    },
}

pub fn run(root: &Path, subcmd: FeedbackSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        FeedbackSubcommand::Add { text, by } => add(root, &text, by.as_deref(), json),
    }
}

fn add(root: &Path, text: &str, by: Option<&str>, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load configuration")?;
    let path = journal::append(root, &config, LogSink::Feedback, text, by)
        .context("failed to write feedback")?;

    if json {
        print_json(&serde_json::json!({
            "sink": LogSink::Feedback,
            "path": path,
        }))?;
    } else {
        println!("Thank you for your feedback!");
    }
    Ok(())
}
