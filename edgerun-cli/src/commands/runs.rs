//! Run command handlers
//!
//! Answers the question a new build needs settled first: is the artifact of a
//! given run still the current one for its version?

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use edgerun_core::domain::registry::ModelRegistry;
use edgerun_core::provenance;

use super::models::colored_phase;
use crate::run_resolver::{resolve_model, resolve_run, resolve_version};
use crate::types::RunRef;

/// Run subcommands
#[derive(Subcommand)]
pub enum RunCommands {
    /// Check whether a run's artifact was superseded by a newer build
    Check {
        /// Model name
        model: String,

        /// Model version
        version: String,

        /// Run ID, unambiguous ID prefix, or run name
        run: String,

        /// Exit with an error when the artifact was superseded
        #[arg(long)]
        strict: bool,
    },
    /// Show the current artifact of a model version
    Latest {
        /// Model name
        model: String,

        /// Model version
        version: String,
    },
}

/// Handle run commands
pub fn handle_run_command(command: RunCommands, registry: &ModelRegistry<'_>) -> Result<()> {
    match command {
        RunCommands::Check {
            model,
            version,
            run,
            strict,
        } => check_run(registry, &model, &version, &run, strict),
        RunCommands::Latest { model, version } => latest_artifact(registry, &model, &version),
    }
}

fn check_run(
    registry: &ModelRegistry<'_>,
    model: &str,
    version: &str,
    run: &str,
    strict: bool,
) -> Result<()> {
    let model = resolve_model(registry, model)?;
    let version = resolve_version(model, version)?;
    let run = resolve_run(version, &RunRef::parse(run))?;

    println!("{}", "Run:".bold());
    println!("  ID:       {}", run.id().cyan());
    println!("  Name:     {}", run.name().bold());
    println!("  Status:   {}", colored_phase(run.phase()));
    println!(
        "  Created:  {}",
        run.created_at().format("%Y-%m-%d %H:%M:%S")
    );
    match &run.published_artifact_location {
        Some(location) => println!("  Artifact: {}", location),
        None => println!("  Artifact: {}", "not published".dimmed()),
    }
    println!();

    match provenance::superseding_run(version, run) {
        Some(newer) => {
            println!("{}", "⚠ Newer build available".yellow().bold());
            println!("  Superseded by: {} ({})", newer.name().bold(), newer.id().dimmed());
            println!(
                "  Created:       {}",
                newer.created_at().format("%Y-%m-%d %H:%M:%S")
            );
            if let Some(location) = &newer.published_artifact_location {
                println!("  Artifact:      {}", location.cyan());
            }

            if strict {
                anyhow::bail!(
                    "artifact of run {} was superseded by run {}",
                    run.name(),
                    newer.name()
                );
            }
        }
        None if run.is_successful() => {
            println!("{}", "✓ Artifact is current".green().bold());
        }
        None => {
            println!("{}", "No successful build exists for this version yet.".yellow());
        }
    }

    Ok(())
}

fn latest_artifact(registry: &ModelRegistry<'_>, model: &str, version: &str) -> Result<()> {
    let model = resolve_model(registry, model)?;
    let version = resolve_version(model, version)?;

    match provenance::latest_successful_run(version) {
        Some(run) => {
            let location = run.published_artifact_location.as_deref().unwrap_or_default();
            println!("{}", location);
            tracing::debug!(run = run.name(), "Latest successful run");
        }
        None => anyhow::bail!(
            "No successful run for {} version {}",
            model.name(),
            version.version
        ),
    }

    Ok(())
}
