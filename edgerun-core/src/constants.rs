//! Fixed names shared with the pipeline definition
//!
//! These strings are part of the contract with the pipeline that produces the
//! execution records. Changing any of them breaks model discovery.

/// Pipeline result holding the registry location the run published to
pub const PUBLISHED_ARTIFACT_RESULT: &str = "target-registry-url";

/// Workspace binding that references the secret for S3-hosted model data
pub const EXTERNAL_SECRET_WORKSPACE: &str = "s3-secret";

/// Workspace binding that references the test data config map
pub const TEST_DATA_WORKSPACE: &str = "test-data";

/// Status reason reported when a record carries no status condition
pub const UNKNOWN_STATUS_REASON: &str = "unknown";

/// Pipeline parameter names
pub mod params {
    pub const MODEL_NAME: &str = "model-name";
    pub const MODEL_VERSION: &str = "model-version";
    pub const FETCH_MODEL: &str = "fetch-model";
    pub const GIT_MODEL_REPO: &str = "git-model-repo";
    pub const GIT_REVISION: &str = "git-revision";
    pub const S3_BUCKET_NAME: &str = "s3-bucket-name";
    pub const MODEL_RELATIVE_PATH: &str = "model-relative-path";
    pub const CONTAINERFILE_RELATIVE_PATH: &str = "containerfile-relative-path";
    pub const TEST_ENDPOINT: &str = "test-endpoint";
    pub const TARGET_IMAGE_REPO: &str = "target-imagerepo";
}
