//! Execution record types
//!
//! Shape of a pipeline run resource as returned by the control-plane list API.
//! Only the fields the engine reads are modelled; everything optional defaults
//! so that a sparse or partially written record still deserializes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One past or in-flight pipeline execution
///
/// Records are owned by the caller and only ever read by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub metadata: RecordMetadata,
    #[serde(default)]
    pub spec: RecordSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RecordStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    #[serde(default)]
    pub name: String,

    /// Opaque unique identifier assigned by the control plane
    #[serde(default)]
    pub uid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSpec {
    /// `None` when the record carries no parameter list at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Param>>,

    /// Storage bindings, left untyped until checked by a structural predicate
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workspaces: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_results: Option<Vec<PipelineResult>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type", default)]
    pub condition_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A named result declared by the pipeline
///
/// `value` stays empty until the producing task has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ExecutionRecord {
    /// Unique identifier of the record
    pub fn id(&self) -> &str {
        &self.metadata.uid
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Raw creation timestamp, if the control plane set one
    pub fn created_at_raw(&self) -> Option<&str> {
        self.metadata.creation_timestamp.as_deref()
    }

    /// Parameter list, `None` when the record has none at all
    pub fn params(&self) -> Option<&[Param]> {
        self.spec.params.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let record: ExecutionRecord = serde_json::from_value(json!({
            "metadata": {
                "name": "tensorflow-housing-1",
                "uid": "3f0a3b4e-0d8c-4c4e-9a57-3a1d2f6f9b01",
                "creationTimestamp": "2024-03-01T10:00:00Z",
                "labels": { "tekton.dev/pipeline": "aiedge-e2e" }
            },
            "spec": {
                "params": [
                    { "name": "model-name", "value": "tensorflow-housing" },
                    { "name": "model-version", "value": "1" }
                ],
                "workspaces": [
                    { "name": "s3-secret", "secret": { "secretName": "housing-credentials-s3" } }
                ]
            },
            "status": {
                "conditions": [
                    { "type": "Succeeded", "status": "True", "reason": "Succeeded" }
                ],
                "pipelineResults": [
                    { "name": "target-registry-url", "value": "quay.io/edge/housing:1" }
                ]
            }
        }))
        .unwrap();

        assert_eq!(record.id(), "3f0a3b4e-0d8c-4c4e-9a57-3a1d2f6f9b01");
        assert_eq!(record.name(), "tensorflow-housing-1");
        assert_eq!(record.created_at_raw(), Some("2024-03-01T10:00:00Z"));
        assert_eq!(record.params().map(<[Param]>::len), Some(2));
        assert_eq!(record.spec.workspaces.len(), 1);
        let status = record.status.unwrap();
        assert_eq!(status.conditions[0].reason.as_deref(), Some("Succeeded"));
        assert_eq!(status.pipeline_results.unwrap().len(), 1);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let record: ExecutionRecord =
            serde_json::from_value(json!({ "metadata": { "name": "orphan" } })).unwrap();

        assert_eq!(record.id(), "");
        assert!(record.params().is_none());
        assert!(record.created_at_raw().is_none());
        assert!(record.status.is_none());
        assert!(record.spec.workspaces.is_empty());
    }

    #[test]
    fn test_empty_param_list_is_not_absent() {
        let record: ExecutionRecord =
            serde_json::from_value(json!({ "metadata": {}, "spec": { "params": [] } })).unwrap();

        assert_eq!(record.params().map(<[Param]>::len), Some(0));
    }
}
