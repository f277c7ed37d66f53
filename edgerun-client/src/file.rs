//! File-backed record source
//!
//! Accepts either a bare JSON array of records or the list envelope the API
//! returns (`{"items": [...]}`), so `kubectl get pipelineruns -o json` output
//! can be fed in directly.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use edgerun_core::domain::record::ExecutionRecord;
use edgerun_core::dto::record::RecordList;
use serde::Deserialize;

use crate::RecordSource;
use crate::error::{ClientError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordDocument {
    Bare(Vec<ExecutionRecord>),
    List(RecordList),
}

/// Parse a JSON document holding execution records
pub fn parse_records(bytes: &[u8]) -> Result<Vec<ExecutionRecord>> {
    let document: RecordDocument = serde_json::from_slice(bytes)
        .map_err(|e| ClientError::ParseError(format!("Invalid records document: {}", e)))?;

    Ok(match document {
        RecordDocument::Bare(records) => records,
        RecordDocument::List(list) => list.items,
    })
}

/// Record source reading a JSON file
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn list_records(&self) -> Result<Vec<ExecutionRecord>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ClientError::Io {
                path: self.path.clone(),
                source,
            })?;

        let records = parse_records(&bytes)?;
        tracing::info!(
            path = %self.path.display(),
            count = records.len(),
            "Loaded execution records"
        );

        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "metadata": { "name": "housing-1", "uid": "u1", "creationTimestamp": "2024-01-01T00:00:00Z" },
        "spec": { "params": [{ "name": "model-name", "value": "housing" }] }
    }"#;

    #[test]
    fn test_parse_bare_array() {
        let records = parse_records(format!("[{RECORD}]").as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "u1");
    }

    #[test]
    fn test_parse_list_envelope() {
        let doc = format!(r#"{{ "apiVersion": "v1", "kind": "List", "items": [{RECORD}, {RECORD}] }}"#);
        let records = parse_records(doc.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_garbage() {
        let err = parse_records(b"not json").unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_file_source_reads_records() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("edgerun-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, format!("[{RECORD}]")).await?;

        let source = FileRecordSource::new(&path);
        let records = source.list_records().await?;
        tokio::fs::remove_file(&path).await?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "housing-1");
        Ok(())
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileRecordSource::new("/definitely/not/here/records.json");
        let err = source.list_records().await.unwrap_err();
        assert!(err.is_not_found());
    }
}
