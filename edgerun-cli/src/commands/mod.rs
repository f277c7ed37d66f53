//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod models;
mod runs;

pub use models::ModelCommands;
pub use runs::RunCommands;

use anyhow::{Context, Result};
use clap::Subcommand;
use edgerun_core::aggregate;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Inspect aggregated models
    Models {
        #[command(subcommand)]
        command: ModelCommands,
    },
    /// Inspect runs of a model version
    Runs {
        #[command(subcommand)]
        command: RunCommands,
    },
}

/// Handle a CLI command
///
/// Loads the execution records once, aggregates them and routes the command
/// to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let source = config.record_source();
    let records = source
        .list_records()
        .await
        .with_context(|| format!("Failed to load execution records from {}", source.describe()))?;

    let registry = aggregate(&records);
    tracing::debug!(
        models = registry.len(),
        runs = registry.run_count(),
        skipped = records.len() - registry.run_count(),
        "Registry built"
    );

    match command {
        Commands::Models { command } => models::handle_model_command(command, &registry),
        Commands::Runs { command } => runs::handle_run_command(command, &registry),
    }
}
