//! Field extraction helpers
//!
//! Every read from an `ExecutionRecord` that can be missing or malformed goes
//! through here and falls back to a documented default instead of failing.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::constants::{
    EXTERNAL_SECRET_WORKSPACE, PUBLISHED_ARTIFACT_RESULT, TEST_DATA_WORKSPACE,
    UNKNOWN_STATUS_REASON,
};
use crate::domain::record::{ExecutionRecord, Param};

/// Parse a creation timestamp, treating missing or unparseable values as the epoch
///
/// Both the aggregator and the provenance resolver order runs through this
/// function so that they agree on ties.
pub fn parse_timestamp_or_epoch(raw: Option<&str>) -> DateTime<Utc> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Value of the first parameter called `name`, or `""` if there is none
pub fn param_value<'a>(params: &'a [Param], name: &str) -> &'a str {
    params
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.value.as_str())
        .unwrap_or_default()
}

/// Reason of the first status condition, or `"unknown"`
pub fn status_reason(record: &ExecutionRecord) -> String {
    record
        .status
        .as_ref()
        .and_then(|s| s.conditions.first())
        .and_then(|c| c.reason.clone())
        .unwrap_or_else(|| UNKNOWN_STATUS_REASON.to_string())
}

/// Registry location the run published to, if it got that far
pub fn published_artifact_location(record: &ExecutionRecord) -> Option<String> {
    record
        .status
        .as_ref()?
        .pipeline_results
        .as_ref()?
        .iter()
        .find(|r| r.name == PUBLISHED_ARTIFACT_RESULT)?
        .value
        .clone()
        .filter(|v| !v.is_empty())
}

/// Name of the secret referenced by a workspace binding
///
/// Returns `None` unless the binding has a `secret` object holding a string
/// `secretName`.
pub fn as_secret_binding(workspace: &Value) -> Option<&str> {
    workspace.get("secret")?.as_object()?.get("secretName")?.as_str()
}

/// Name of the config map referenced by a workspace binding
pub fn as_config_map_binding(workspace: &Value) -> Option<&str> {
    workspace.get("configMap")?.as_object()?.get("name")?.as_str()
}

fn find_workspace<'a>(workspaces: &'a [Value], name: &str) -> Option<&'a Value> {
    workspaces
        .iter()
        .find(|w| w.get("name").and_then(Value::as_str) == Some(name))
}

/// Secret holding credentials for externally stored model data
pub fn external_secret_name(record: &ExecutionRecord) -> Option<String> {
    find_workspace(&record.spec.workspaces, EXTERNAL_SECRET_WORKSPACE)
        .and_then(as_secret_binding)
        .map(str::to_string)
}

/// Config map holding the test data the run validated against
pub fn test_data_config_map(record: &ExecutionRecord) -> Option<String> {
    find_workspace(&record.spec.workspaces, TEST_DATA_WORKSPACE)
        .and_then(as_config_map_binding)
        .map(str::to_string)
}
