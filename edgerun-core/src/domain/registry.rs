//! Model views and the registry that indexes them

use std::collections::BTreeMap;

use crate::domain::identity::ModelIdentity;
use crate::domain::run::{RunView, VersionView};

/// Aggregated state of one model
///
/// `identity`, `external_secret_name` and `latest_run` always come from the
/// same record: the most recently created one seen for this model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelView<'a> {
    pub identity: ModelIdentity,
    pub external_secret_name: Option<String>,
    pub versions: BTreeMap<String, VersionView<'a>>,
    pub latest_run: RunView<'a>,
}

impl<'a> ModelView<'a> {
    pub fn name(&self) -> &str {
        &self.identity.model_name
    }

    pub fn version(&self, version: &str) -> Option<&VersionView<'a>> {
        self.versions.get(version)
    }

    pub fn run_count(&self) -> usize {
        self.versions.values().map(|v| v.runs.len()).sum()
    }
}

/// All models found in a record collection, keyed by model name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelRegistry<'a> {
    pub models: BTreeMap<String, ModelView<'a>>,
}

impl<'a> ModelRegistry<'a> {
    pub fn get(&self, model_name: &str) -> Option<&ModelView<'a>> {
        self.models.get(model_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ModelView<'a>)> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Total number of runs across every model and version
    pub fn run_count(&self) -> usize {
        self.models.values().map(ModelView::run_count).sum()
    }
}
