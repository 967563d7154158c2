//! File API data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Processing status of an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Uploaded,
    Processed,
    Pending,
    Error,
    Deleting,
    Deleted,
    /// Status value this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// Declared purpose of an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilePurpose {
    #[serde(rename = "fine-tune")]
    FineTune,
    #[serde(other)]
    Unknown,
}

/// File metadata as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    pub id: String,
    pub object: String,
    pub bytes: u64,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub filename: String,
    pub purpose: FilePurpose,
    pub status: FileStatus,
    #[serde(default)]
    pub status_details: Option<String>,
}

/// List of files belonging to the organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileList {
    pub data: Vec<File>,
    pub object: String,
}

/// Acknowledgement returned when a file is deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteFileResponse {
    pub id: String,
    pub object: String,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_deserializes() {
        let body = r#"{
            "id": "file-abc123",
            "object": "file",
            "bytes": 140,
            "created_at": 1613779121,
            "filename": "mydata.jsonl",
            "purpose": "fine-tune",
            "status": "processed",
            "status_details": null
        }"#;

        let file: File = serde_json::from_str(body).unwrap();
        assert_eq!(file.id, "file-abc123");
        assert_eq!(file.purpose, FilePurpose::FineTune);
        assert_eq!(file.status, FileStatus::Processed);
        assert!(file.status_details.is_none());
    }

    #[test]
    fn test_unrecognized_status_maps_to_unknown() {
        let file: File = serde_json::from_str(
            r#"{
                "id": "file-abc123",
                "object": "file",
                "bytes": 140,
                "created_at": 1613779121,
                "filename": "mydata.jsonl",
                "purpose": "assistants",
                "status": "quarantined"
            }"#,
        )
        .unwrap();
        assert_eq!(file.status, FileStatus::Unknown);
        assert_eq!(file.purpose, FilePurpose::Unknown);
    }

    #[test]
    fn test_delete_response_deserializes() {
        let response: DeleteFileResponse = serde_json::from_str(
            r#"{ "id": "file-abc123", "object": "file", "deleted": true }"#,
        )
        .unwrap();
        assert!(response.deleted);
    }
}
