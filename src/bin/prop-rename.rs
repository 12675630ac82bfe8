//! CLI for the prop-rename tool.

use anyhow::{Context, Result};
use clap::Parser;
use prop_rename::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prop-rename")]
#[command(author, version, about = "Rename identifiers across a fixed set of source files", long_about = None)]
struct Cli {
    /// JSON config with the file list and rename rules (defaults to the built-in migration)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the configured relative paths are resolved against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Preview changes as diffs without writing files or backups
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RenameConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => RenameConfig::default_migration(),
    };
    let rules = config.rule_set().context("Invalid rule set")?;

    println!("{}", config.description);
    println!("Renames:");
    for line in rules.describe() {
        println!("  {line}");
    }
    println!();

    let mut summary = RunSummary::default();
    for file in &config.files {
        let path = cli.root.join(file);
        println!("Processing {}...", file.display());

        let outcome = if cli.dry_run {
            let preview = preview_file(&path, &rules)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            match preview {
                None => Outcome::Missing,
                Some(rewrite) if rewrite.is_modified() => {
                    print!("{}", colorized_diff(&rewrite));
                    Outcome::Updated
                }
                Some(_) => Outcome::Unchanged,
            }
        } else {
            rewrite_file(&path, &rules)
                .with_context(|| format!("Failed to rewrite {}", path.display()))?
        };

        match outcome {
            Outcome::Updated if cli.dry_run => println!("  would update"),
            Outcome::Updated => println!("  updated"),
            Outcome::Unchanged => println!("  no changes needed"),
            Outcome::Missing => eprintln!("warning: file not found: {}", path.display()),
        }
        summary.record(outcome);
    }

    println!();
    println!("{summary}");
    if !cli.dry_run && summary.updated > 0 {
        println!("Backups saved with the {BACKUP_SUFFIX} extension");
    }

    Ok(())
}
