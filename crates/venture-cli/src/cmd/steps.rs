use crate::output::{print_json, print_table};
use clap::Subcommand;
use venture_core::catalog;

#[derive(Subcommand)]
pub enum StepsSubcommand {
    /// List all ten steps in order
    List,
    /// Show the detailed description for one step
    Show { name: String },
}

pub fn run(subcmd: StepsSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        StepsSubcommand::List => list(json),
        StepsSubcommand::Show { name } => show(&name, json),
    }
}

fn list(json: bool) -> anyhow::Result<()> {
    let steps = catalog::steps();
    if json {
        return print_json(&steps);
    }

    let rows: Vec<Vec<String>> = steps
        .iter()
        .map(|s| vec![s.index.to_string(), s.name.to_string()])
        .collect();
    print_table(&["#", "STEP"], rows);
    Ok(())
}

fn show(name: &str, json: bool) -> anyhow::Result<()> {
    // Unknown names fall back to the catalog's default text, never an error.
    let description = catalog::description(name);
    if json {
        return print_json(&serde_json::json!({
            "name": name,
            "description": description,
        }));
    }

    println!("{name}");
    println!("{description}");
    Ok(())
}
