mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{
    config::ConfigSubcommand, feedback::FeedbackSubcommand, journal::JournalSubcommand,
    steps::StepsSubcommand,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "venture",
    about = "Interactive checklist for the 10 steps to starting a new business",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from venture.yaml or .git/)
    #[arg(long, global = true, env = "VENTURE_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the guide interactively, tracking completion for the session
    Guide {
        /// Display name used in the greeting
        #[arg(long)]
        name: Option<String>,

        /// User profile: beginner, intermediate, advanced
        #[arg(long, default_value = "beginner")]
        profile: String,

        /// Guide to walk through
        #[arg(long, default_value = "New Business")]
        project: String,

        /// Skip the cosmetic pacing delay even if configured
        #[arg(long)]
        no_delay: bool,
    },

    /// Show the step catalog
    Steps {
        #[command(subcommand)]
        subcommand: StepsSubcommand,
    },

    /// Show advice lines for a profile
    Recommend {
        /// User profile: beginner, intermediate, advanced
        #[arg(long)]
        profile: String,
    },

    /// Show the engagement metric series
    Engagement,

    /// Append entries to the progress journal
    Journal {
        #[command(subcommand)]
        subcommand: JournalSubcommand,
    },

    /// Record user feedback
    Feedback {
        #[command(subcommand)]
        subcommand: FeedbackSubcommand,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// List external resources for new founders
    Resources,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Guide {
            name,
            profile,
            project,
            no_delay,
        } => cmd::guide::run(&root, name.as_deref(), &profile, &project, no_delay),
        Commands::Steps { subcommand } => cmd::steps::run(subcommand, cli.json),
        Commands::Recommend { profile } => cmd::recommend::run(&profile, cli.json),
        Commands::Engagement => cmd::engagement::run(cli.json),
        Commands::Journal { subcommand } => cmd::journal::run(&root, subcommand, cli.json),
        Commands::Feedback { subcommand } => cmd::feedback::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Resources => cmd::resources::run(cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
