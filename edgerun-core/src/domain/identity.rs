//! Model identity
//!
//! Which model a run belongs to is encoded only in the pipeline parameters.

use serde::{Deserialize, Serialize};

use crate::constants::params;
use crate::domain::record::Param;
use crate::extract::param_value;

/// Where the pipeline fetched the model from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    S3,
    Git,
}

impl LocationKind {
    /// Parse the `fetch-model` parameter value
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "s3" => Some(LocationKind::S3),
            "git" => Some(LocationKind::Git),
            _ => None,
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationKind::S3 => write!(f, "S3"),
            LocationKind::Git => write!(f, "Git"),
        }
    }
}

/// Identity of the model a run built, as declared by its parameters
///
/// Missing parameters leave the matching field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelIdentity {
    pub model_name: String,
    pub model_version: String,
    pub location_kind: Option<LocationKind>,

    /// Git repository URL or S3 bucket name, depending on `location_kind`
    pub source_locator: String,

    /// Git revision; empty for S3 models
    pub source_revision: String,

    /// Path of the model inside the repository or bucket
    pub path_within_source: String,

    /// Path of the Containerfile used to package the model
    pub container_recipe_path: String,

    pub test_endpoint: String,
    pub target_image_repo: String,
}

impl ModelIdentity {
    pub fn from_params(list: &[Param]) -> Self {
        let location_kind = LocationKind::parse(param_value(list, params::FETCH_MODEL));
        let git_repo = param_value(list, params::GIT_MODEL_REPO);
        let bucket = param_value(list, params::S3_BUCKET_NAME);

        let source_locator = match location_kind {
            Some(LocationKind::Git) => git_repo,
            Some(LocationKind::S3) => bucket,
            None if !git_repo.is_empty() => git_repo,
            None => bucket,
        };

        Self {
            model_name: param_value(list, params::MODEL_NAME).to_string(),
            model_version: param_value(list, params::MODEL_VERSION).to_string(),
            location_kind,
            source_locator: source_locator.to_string(),
            source_revision: param_value(list, params::GIT_REVISION).to_string(),
            path_within_source: param_value(list, params::MODEL_RELATIVE_PATH).to_string(),
            container_recipe_path: param_value(list, params::CONTAINERFILE_RELATIVE_PATH)
                .to_string(),
            test_endpoint: param_value(list, params::TEST_ENDPOINT).to_string(),
            target_image_repo: param_value(list, params::TARGET_IMAGE_REPO).to_string(),
        }
    }
}
