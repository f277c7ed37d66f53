//! Model command handlers
//!
//! Lists aggregated models and shows a model's versions and run history.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use edgerun_core::domain::registry::{ModelRegistry, ModelView};
use edgerun_core::domain::run::{RunPhase, RunView, VersionView};
use edgerun_core::dto::registry::ModelSummary;
use edgerun_core::provenance;

use crate::run_resolver::resolve_model;

/// Model subcommands
#[derive(Subcommand)]
pub enum ModelCommands {
    /// List all models
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show a model with its versions and runs
    Get {
        /// Model name
        name: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Handle model commands
pub fn handle_model_command(command: ModelCommands, registry: &ModelRegistry<'_>) -> Result<()> {
    match command {
        ModelCommands::List { json } => list_models(registry, json),
        ModelCommands::Get { name, json } => get_model(registry, &name, json),
    }
}

fn list_models(registry: &ModelRegistry<'_>, json: bool) -> Result<()> {
    if json {
        let summaries: Vec<ModelSummary> = registry.iter().map(|(_, m)| m.into()).collect();
        let out = serde_json::to_string_pretty(&summaries).context("Failed to serialize models")?;
        println!("{}", out);
        return Ok(());
    }

    if registry.is_empty() {
        println!("{}", "No models found.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} model(s):", registry.len()).bold());
    println!();
    for (_, model) in registry.iter() {
        print_model_summary(model);
    }

    Ok(())
}

fn get_model(registry: &ModelRegistry<'_>, name: &str, json: bool) -> Result<()> {
    let model = resolve_model(registry, name)?;

    if json {
        let out = serde_json::to_string_pretty(&ModelSummary::from(model))
            .context("Failed to serialize model")?;
        println!("{}", out);
        return Ok(());
    }

    print_model_details(model);
    Ok(())
}

/// Display name for a model; the empty name is a real key
fn display_name(model: &ModelView<'_>) -> String {
    if model.name().is_empty() {
        "(unnamed)".to_string()
    } else {
        model.name().to_string()
    }
}

pub(crate) fn colored_phase(phase: RunPhase) -> ColoredString {
    let text = phase.to_string();
    match phase {
        RunPhase::Succeeded => text.green(),
        RunPhase::Failed => text.red(),
        RunPhase::Cancelled => text.dimmed(),
        RunPhase::Running => text.yellow(),
        RunPhase::Unknown => text.normal(),
    }
}

fn print_model_summary(model: &ModelView<'_>) {
    let latest = &model.latest_run;
    let versions: Vec<&str> = model.versions.keys().map(String::as_str).collect();

    println!("  {} {}", "▸".cyan(), display_name(model).bold());
    println!("    Versions:   {}", versions.join(", ").dimmed());
    println!(
        "    Latest run: {} ({}) {}",
        latest.name(),
        colored_phase(latest.phase()),
        latest
            .created_at()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    match &latest.published_artifact_location {
        Some(location) => println!("    Artifact:   {}", location.cyan()),
        None => println!("    Artifact:   {}", "not published".dimmed()),
    }
    println!();
}

fn print_model_details(model: &ModelView<'_>) {
    let identity = &model.identity;

    println!("{}", "Model Details:".bold());
    println!("  Name:          {}", display_name(model).bold());
    println!("  Version:       {}", identity.model_version);
    match identity.location_kind {
        Some(kind) => println!("  Location:      {} {}", kind, identity.source_locator),
        None => println!("  Location:      {}", identity.source_locator),
    }
    if !identity.source_revision.is_empty() {
        println!("  Revision:      {}", identity.source_revision);
    }
    if !identity.path_within_source.is_empty() {
        println!("  Model path:    {}", identity.path_within_source);
    }
    if !identity.container_recipe_path.is_empty() {
        println!("  Containerfile: {}", identity.container_recipe_path);
    }
    if !identity.test_endpoint.is_empty() {
        println!("  Test endpoint: {}", identity.test_endpoint);
    }
    if !identity.target_image_repo.is_empty() {
        println!("  Image repo:    {}", identity.target_image_repo);
    }
    if let Some(secret) = &model.external_secret_name {
        println!("  S3 secret:     {}", secret.cyan());
    }
    if let Some(config_map) = model.latest_run.test_data_config_map() {
        println!("  Test data:     {}", config_map);
    }

    for version in model.versions.values() {
        println!();
        print_version(version);
    }
}

fn print_version(version: &VersionView<'_>) {
    println!("{}", format!("Version {}:", version.version).bold());
    println!("{}", "─".repeat(80).dimmed());

    for run in provenance::runs_newest_first(version) {
        print_run_line(version, run);
    }
}

fn print_run_line(version: &VersionView<'_>, run: &RunView<'_>) {
    let marker = match provenance::superseding_run(version, run) {
        Some(newer) => format!("overridden by {}", newer.name()).yellow(),
        None if run.is_successful() => "current".green(),
        None => "".normal(),
    };

    println!(
        "  {}  {:<32} {:<10} {}",
        run.created_at().format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
        run.name(),
        colored_phase(run.phase()),
        marker
    );
    if let Some(location) = &run.published_artifact_location {
        println!("  {:>19}  {}", "", location.cyan());
    }
}
