//! Registry snapshot DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::identity::ModelIdentity;
use crate::domain::registry::ModelView;
use crate::domain::run::{RunPhase, RunView, VersionView};
use crate::provenance;

/// Snapshot of a single run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub status_reason: String,
    pub phase: RunPhase,
    pub published_artifact_location: Option<String>,

    /// Whether a newer successful run of the same version replaced this one
    pub overridden: bool,
}

impl RunSummary {
    pub fn new(run: &RunView<'_>, overridden: bool) -> Self {
        Self {
            id: run.id().to_string(),
            name: run.name().to_string(),
            created_at: run.created_at(),
            status_reason: run.status_reason.clone(),
            phase: run.phase(),
            published_artifact_location: run.published_artifact_location.clone(),
            overridden,
        }
    }
}

/// Snapshot of a model version, runs newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionSummary {
    pub version: String,
    pub latest_artifact_location: Option<String>,
    pub runs: Vec<RunSummary>,
}

impl From<&VersionView<'_>> for VersionSummary {
    fn from(version: &VersionView<'_>) -> Self {
        Self {
            version: version.version.clone(),
            latest_artifact_location: provenance::latest_successful_run(version)
                .and_then(|run| run.published_artifact_location.clone()),
            runs: provenance::runs_newest_first(version)
                .into_iter()
                .map(|run| RunSummary::new(run, provenance::is_overridden(version, run)))
                .collect(),
        }
    }
}

/// Snapshot of a model and all of its versions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    pub identity: ModelIdentity,
    pub external_secret_name: Option<String>,
    pub latest_run: RunSummary,
    pub versions: Vec<VersionSummary>,
}

impl From<&ModelView<'_>> for ModelSummary {
    fn from(model: &ModelView<'_>) -> Self {
        let latest_overridden = model
            .version(&model.identity.model_version)
            .is_some_and(|version| provenance::is_overridden(version, &model.latest_run));

        Self {
            identity: model.identity.clone(),
            external_secret_name: model.external_secret_name.clone(),
            latest_run: RunSummary::new(&model.latest_run, latest_overridden),
            versions: model.versions.values().map(VersionSummary::from).collect(),
        }
    }
}
