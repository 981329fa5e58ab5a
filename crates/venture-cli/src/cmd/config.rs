use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use venture_core::config::Config;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration (file values merged with defaults)
    Show,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
    }
}

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load configuration")?;

    if json {
        return print_json(&config);
    }

    println!("user_name: {}", config.user_name);
    println!("journal_file: {}", config.journal_file);
    println!("feedback_file: {}", config.feedback_file);
    println!("pacing_ms: {}", config.pacing_ms);
    Ok(())
}
