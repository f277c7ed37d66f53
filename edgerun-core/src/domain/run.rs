//! Run and version views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::record::ExecutionRecord;
use crate::extract;

/// Coarse classification of a run's status reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Running,
    Succeeded,
    Failed,
    Cancelled,
    Unknown,
}

impl RunPhase {
    pub fn from_reason(reason: &str) -> Self {
        match reason {
            "Succeeded" | "Completed" => RunPhase::Succeeded,
            "Running" | "Started" | "Pending" | "ResolvingPipelineRef" => RunPhase::Running,
            "Cancelled" | "PipelineRunCancelled" | "StoppedRunFinally" | "CancelledRunFinally" => {
                RunPhase::Cancelled
            }
            "Failed"
            | "PipelineRunTimeout"
            | "CouldntGetPipeline"
            | "InvalidWorkspaceBindings"
            | "PipelineValidationFailed" => RunPhase::Failed,
            _ => RunPhase::Unknown,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunPhase::Succeeded | RunPhase::Failed | RunPhase::Cancelled
        )
    }
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunPhase::Running => write!(f, "Running"),
            RunPhase::Succeeded => write!(f, "Succeeded"),
            RunPhase::Failed => write!(f, "Failed"),
            RunPhase::Cancelled => write!(f, "Cancelled"),
            RunPhase::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Derived view of a single execution record
///
/// Borrows the record it was derived from; the caller keeps ownership of the
/// input collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RunView<'a> {
    pub record: &'a ExecutionRecord,

    /// First status condition's reason, or `"unknown"`
    pub status_reason: String,

    /// Set once the run has published its artifact
    pub published_artifact_location: Option<String>,
}

impl<'a> RunView<'a> {
    pub fn from_record(record: &'a ExecutionRecord) -> Self {
        Self {
            record,
            status_reason: extract::status_reason(record),
            published_artifact_location: extract::published_artifact_location(record),
        }
    }

    pub fn id(&self) -> &'a str {
        self.record.id()
    }

    pub fn name(&self) -> &'a str {
        self.record.name()
    }

    /// Creation time, the epoch when missing or unparseable
    pub fn created_at(&self) -> DateTime<Utc> {
        extract::parse_timestamp_or_epoch(self.record.created_at_raw())
    }

    pub fn phase(&self) -> RunPhase {
        RunPhase::from_reason(&self.status_reason)
    }

    /// Whether this run produced an artifact
    pub fn is_successful(&self) -> bool {
        self.published_artifact_location.is_some()
    }

    pub fn test_data_config_map(&self) -> Option<String> {
        extract::test_data_config_map(self.record)
    }
}

/// All runs recorded for one model version
///
/// `runs` is kept in discovery order, which is not necessarily chronological.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionView<'a> {
    pub version: String,
    pub runs: Vec<RunView<'a>>,
}

impl<'a> VersionView<'a> {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            runs: Vec::new(),
        }
    }

    pub fn find_run(&self, id: &str) -> Option<&RunView<'a>> {
        self.runs.iter().find(|r| r.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phase_from_reason() {
        assert_eq!(RunPhase::from_reason("Succeeded"), RunPhase::Succeeded);
        assert_eq!(RunPhase::from_reason("Completed"), RunPhase::Succeeded);
        assert_eq!(RunPhase::from_reason("Running"), RunPhase::Running);
        assert_eq!(RunPhase::from_reason("PipelineRunTimeout"), RunPhase::Failed);
        assert_eq!(
            RunPhase::from_reason("PipelineRunCancelled"),
            RunPhase::Cancelled
        );
        assert_eq!(RunPhase::from_reason("unknown"), RunPhase::Unknown);
        assert!(!RunPhase::Running.is_terminal());
        assert!(RunPhase::Failed.is_terminal());
    }

    #[test]
    fn test_run_view_from_record() {
        let record: ExecutionRecord = serde_json::from_value(json!({
            "metadata": {
                "name": "bikes-run-1",
                "uid": "a1",
                "creationTimestamp": "2024-05-02T08:30:00Z"
            },
            "spec": {
                "params": [],
                "workspaces": [{ "name": "test-data", "configMap": { "name": "bikes-data" } }]
            },
            "status": {
                "conditions": [{ "type": "Succeeded", "status": "True", "reason": "Succeeded" }],
                "pipelineResults": [{ "name": "target-registry-url", "value": "quay.io/edge/bikes:1" }]
            }
        }))
        .unwrap();

        let run = RunView::from_record(&record);
        assert_eq!(run.id(), "a1");
        assert_eq!(run.name(), "bikes-run-1");
        assert_eq!(run.status_reason, "Succeeded");
        assert_eq!(run.phase(), RunPhase::Succeeded);
        assert!(run.is_successful());
        assert_eq!(run.created_at().to_rfc3339(), "2024-05-02T08:30:00+00:00");
        assert_eq!(run.test_data_config_map().as_deref(), Some("bikes-data"));
    }

    #[test]
    fn test_run_view_defaults() {
        let record = ExecutionRecord::default();
        let run = RunView::from_record(&record);

        assert_eq!(run.status_reason, "unknown");
        assert_eq!(run.phase(), RunPhase::Unknown);
        assert!(!run.is_successful());
        assert_eq!(run.created_at(), DateTime::<Utc>::UNIX_EPOCH);
    }
}
