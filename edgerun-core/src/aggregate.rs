//! Aggregator
//!
//! Folds a flat list of execution records into a model → version → run registry.

use crate::domain::identity::ModelIdentity;
use crate::domain::record::ExecutionRecord;
use crate::domain::registry::{ModelRegistry, ModelView};
use crate::domain::run::{RunView, VersionView};
use crate::extract;

/// Build a `ModelRegistry` from execution records
///
/// Records without a parameter list are not model builds and are skipped.
/// The result is recomputed from scratch on every call.
pub fn aggregate(records: &[ExecutionRecord]) -> ModelRegistry<'_> {
    let registry = records.iter().fold(ModelRegistry::default(), fold_record);

    tracing::debug!(
        records = records.len(),
        models = registry.len(),
        runs = registry.run_count(),
        "Aggregated execution records"
    );

    registry
}

fn fold_record<'a>(mut registry: ModelRegistry<'a>, record: &'a ExecutionRecord) -> ModelRegistry<'a> {
    let Some(params) = record.params() else {
        tracing::debug!(record = record.name(), "Skipping record without parameters");
        return registry;
    };

    let identity = ModelIdentity::from_params(params);
    let secret = extract::external_secret_name(record);
    let run = RunView::from_record(record);

    let model_name = identity.model_name.clone();
    let model_version = identity.model_version.clone();

    let model = registry
        .models
        .entry(model_name)
        .or_insert_with(|| ModelView {
            identity: identity.clone(),
            external_secret_name: secret.clone(),
            versions: Default::default(),
            latest_run: run.clone(),
        });

    model
        .versions
        .entry(model_version.clone())
        .or_insert_with(|| VersionView::new(model_version))
        .runs
        .push(run.clone());

    // Strictly newer only: on equal timestamps the first record seen stays latest.
    if run.created_at() > model.latest_run.created_at() {
        tracing::debug!(
            model = %identity.model_name,
            run = run.name(),
            "Newer run replaces latest"
        );
        model.identity = identity;
        model.external_secret_name = secret;
        model.latest_run = run;
    }

    registry
}
