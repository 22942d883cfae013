//! Asynchronous record loading.

use std::path::{Path, PathBuf};

use anyhow::Context;
use gantt_protocol::{Record, dummy::sample_records, parse_records};
use gantt_tui::{RecordLoad, RecordReceiver};
use tokio::sync::oneshot;

/// Starts loading records in the background.
///
/// Reads `path` as a JSON array of records, or uses the built-in sample
/// fixture when no path is given. The result arrives on the returned
/// receiver exactly once.
pub fn spawn_loader(path: Option<PathBuf>) -> RecordReceiver {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let load = match path {
            Some(path) => load_records(&path).await,
            None => {
                tracing::info!("no data file given, showing sample records");
                Ok(sample_records())
            }
        };
        if tx.send(load).is_err() {
            tracing::debug!("viewer exited before records were loaded");
        }
    });
    rx
}

/// Reads and parses a record file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// records.
pub async fn load_records(path: &Path) -> RecordLoad {
    tracing::debug!(path = %path.display(), "reading records");
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records: Vec<Record> =
        parse_records(&json).with_context(|| format!("invalid records in {}", path.display()))?;
    tracing::info!(count = records.len(), path = %path.display(), "records loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn loads_records_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        let json = serde_json::json!([
            {
                "id": 1,
                "task_name": "Kickoff",
                "start": "2023-06-01T09:00:00",
                "finish": "2023-06-02T17:00:00"
            },
            { "id": 2, "task_name": "Undated" }
        ]);
        std::fs::write(&path, json.to_string()).unwrap();

        let records = spawn_loader(Some(path)).await.unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field("task_name"), "Kickoff");
        assert!(records[0].span().is_some());
        assert!(records[1].span().is_none());
    }

    #[tokio::test]
    async fn missing_path_uses_sample_records() {
        let records = spawn_loader(None).await.unwrap().unwrap();
        assert_eq!(records.len(), sample_records().len());
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");

        let err = spawn_loader(Some(path)).await.unwrap().unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }

    #[tokio::test]
    async fn invalid_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "{ not an array").unwrap();

        let err = load_records(&path).await.unwrap_err();
        assert!(err.to_string().starts_with("invalid records in"));
    }
}
