//! Lookup helpers
//!
//! Resolve user-supplied model names, versions and run references against an
//! aggregated registry, with errors that list what is available.

use anyhow::{Result, anyhow};
use edgerun_core::domain::registry::{ModelRegistry, ModelView};
use edgerun_core::domain::run::{RunView, VersionView};

use crate::types::RunRef;

/// Find a model by name
pub fn resolve_model<'r, 'a>(registry: &'r ModelRegistry<'a>, name: &str) -> Result<&'r ModelView<'a>> {
    registry.get(name).ok_or_else(|| {
        let known: Vec<&str> = registry.iter().map(|(name, _)| name.as_str()).collect();
        anyhow!(
            "No model named '{}' (known models: {})",
            name,
            if known.is_empty() { "none".to_string() } else { known.join(", ") }
        )
    })
}

/// Find a version of a model
pub fn resolve_version<'m, 'a>(model: &'m ModelView<'a>, version: &str) -> Result<&'m VersionView<'a>> {
    model.version(version).ok_or_else(|| {
        let known: Vec<&str> = model.versions.keys().map(String::as_str).collect();
        anyhow!(
            "Model '{}' has no version '{}' (known versions: {})",
            model.name(),
            version,
            known.join(", ")
        )
    })
}

/// Resolve a run reference within a version
///
/// A full ID must match exactly. Otherwise an exact run name wins, then a
/// unique ID prefix.
///
/// # Errors
/// Returns an error if:
/// - No run matches
/// - Multiple runs match the prefix (ambiguous)
pub fn resolve_run<'v, 'a>(version: &'v VersionView<'a>, run_ref: &RunRef) -> Result<&'v RunView<'a>> {
    if let RunRef::Full(id) = run_ref {
        return version.find_run(id).ok_or_else(|| {
            anyhow!("No run with ID '{}' in version '{}'", id, version.version)
        });
    }

    let partial = run_ref.as_str();
    if let Some(run) = version.runs.iter().find(|r| r.name() == partial) {
        return Ok(run);
    }

    let prefix = partial.to_lowercase();
    let matches: Vec<&RunView<'a>> = version
        .runs
        .iter()
        .filter(|r| r.id().to_lowercase().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [] => Err(anyhow!(
            "No run named '{}' or with ID starting with '{}' in version '{}'",
            partial,
            prefix,
            version.version
        )),
        [run] => Ok(*run),
        _ => {
            let ids: Vec<&str> = matches.iter().map(|r| r.id()).collect();
            Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple runs: {}",
                prefix,
                ids.join(", ")
            ))
        }
    }
}
