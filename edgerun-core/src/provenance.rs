//! Provenance resolver
//!
//! Decides which run of a model version produced the authoritative artifact,
//! and whether a given run's artifact has since been replaced.
//!
//! Every query sorts a copy of the version's runs; the stored discovery order
//! is never touched.

use crate::domain::run::{RunView, VersionView};

/// Runs of a version ordered newest first
///
/// Runs with equal timestamps keep their discovery order. Missing or
/// unparseable timestamps sort as the oldest.
pub fn runs_newest_first<'v, 'a>(version: &'v VersionView<'a>) -> Vec<&'v RunView<'a>> {
    let mut runs: Vec<&RunView<'a>> = version.runs.iter().collect();
    runs.sort_by_key(|run| std::cmp::Reverse(run.created_at()));
    runs
}

/// Most recent run that published an artifact
pub fn latest_successful_run<'v, 'a>(version: &'v VersionView<'a>) -> Option<&'v RunView<'a>> {
    runs_newest_first(version)
        .into_iter()
        .find(|run| run.is_successful())
}

/// The run whose artifact supersedes `target`'s, if any
///
/// A version with a single run has nothing to supersede it, and neither does a
/// version where no run has published yet.
pub fn superseding_run<'v, 'a>(
    version: &'v VersionView<'a>,
    target: &RunView<'_>,
) -> Option<&'v RunView<'a>> {
    if version.runs.len() <= 1 {
        return None;
    }

    latest_successful_run(version).filter(|latest| latest.id() != target.id())
}

/// Whether `target`'s artifact was overridden by a newer successful run
pub fn is_overridden(version: &VersionView<'_>, target: &RunView<'_>) -> bool {
    superseding_run(version, target).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::ExecutionRecord;
    use serde_json::{Value, json};

    fn record(uid: &str, created_at: Option<&str>, artifact: Option<&str>) -> ExecutionRecord {
        let mut value = json!({
            "metadata": { "name": format!("housing-{uid}"), "uid": uid },
            "spec": { "params": [
                { "name": "model-name", "value": "housing" },
                { "name": "model-version", "value": "1" }
            ]},
            "status": {
                "conditions": [{ "type": "Succeeded", "status": "Unknown", "reason": "Running" }]
            }
        });
        if let Some(ts) = created_at {
            value["metadata"]["creationTimestamp"] = Value::String(ts.to_string());
        }
        if let Some(location) = artifact {
            value["status"]["pipelineResults"] =
                json!([{ "name": "target-registry-url", "value": location }]);
        }
        serde_json::from_value(value).unwrap()
    }

    fn version(records: &[ExecutionRecord]) -> VersionView<'_> {
        VersionView {
            version: "1".to_string(),
            runs: records.iter().map(RunView::from_record).collect(),
        }
    }

    const T1: &str = "2024-01-01T00:00:00Z";
    const T2: &str = "2024-01-02T00:00:00Z";
    const T3: &str = "2024-01-03T00:00:00Z";

    #[test]
    fn test_single_run_is_never_overridden() {
        let records = vec![record("a", Some(T1), Some("quay.io/edge/housing:1"))];
        let version = version(&records);

        assert!(!is_overridden(&version, &version.runs[0]));
    }

    #[test]
    fn test_no_successful_run_means_no_override() {
        let records = vec![record("a", Some(T1), None), record("b", Some(T2), None)];
        let version = version(&records);

        assert!(latest_successful_run(&version).is_none());
        assert!(!is_overridden(&version, &version.runs[0]));
        assert!(!is_overridden(&version, &version.runs[1]));
    }

    #[test]
    fn test_newer_success_overrides_older() {
        let records = vec![
            record("t1", Some(T1), Some("quay.io/edge/housing:1-a")),
            record("t2", Some(T2), None),
            record("t3", Some(T3), Some("quay.io/edge/housing:1-c")),
        ];
        let version = version(&records);

        assert!(is_overridden(&version, &version.runs[0]));
        assert!(!is_overridden(&version, &version.runs[2]));
        assert_eq!(
            superseding_run(&version, &version.runs[0]).map(|r| r.id()),
            Some("t3")
        );
    }

    #[test]
    fn test_failed_newer_run_does_not_override() {
        let records = vec![
            record("t2", Some(T2), None),
            record("t1", Some(T1), Some("quay.io/edge/housing:1")),
        ];
        let version = version(&records);

        assert_eq!(latest_successful_run(&version).map(|r| r.id()), Some("t1"));
        assert!(!is_overridden(&version, &version.runs[1]));
        // A run without an artifact is "overridden" by the one that has it
        assert!(is_overridden(&version, &version.runs[0]));
    }

    #[test]
    fn test_unparseable_timestamp_sorts_oldest() {
        let records = vec![
            record("broken", Some("garbage"), Some("quay.io/edge/housing:x")),
            record("missing", None, Some("quay.io/edge/housing:y")),
            record("real", Some(T1), Some("quay.io/edge/housing:z")),
        ];
        let version = version(&records);

        assert_eq!(latest_successful_run(&version).map(|r| r.id()), Some("real"));
        let order: Vec<&str> = runs_newest_first(&version).iter().map(|r| r.id()).collect();
        assert_eq!(order, vec!["real", "broken", "missing"]);
    }

    #[test]
    fn test_sorting_does_not_reorder_version() {
        let records = vec![
            record("t1", Some(T1), Some("a")),
            record("t3", Some(T3), Some("c")),
            record("t2", Some(T2), Some("b")),
        ];
        let version = version(&records);
        let before = version.clone();

        assert!(is_overridden(&version, &version.runs[0]));
        assert!(is_overridden(&version, &version.runs[0]));
        assert_eq!(version, before);
    }
}
