//! Fine-tuning API data models
//!
//! Shapes for the `/fine_tuning/jobs` endpoint group: job creation requests,
//! job records, and job event records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a fine-tuning job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FineTuningJobStatus {
    Created,
    Pending,
    Running,
    Succeeded,
    Failed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// Request to create a fine-tuning job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FineTuningRequest {
    /// ID of an uploaded file containing the training data
    pub training_file: String,

    /// ID of an uploaded file containing validation data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_file: Option<String>,

    /// Base model to fine-tune
    pub model: String,
}

/// Hyperparameters reported on a fine-tuning job
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FineTuningHyperparameters {
    #[serde(default)]
    pub n_epochs: u32,
}

/// A fine-tuning job record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FineTuningJob {
    pub object: String,
    pub id: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fine_tuned_model: Option<String>,
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub result_files: Vec<String>,
    pub status: FineTuningJobStatus,
    #[serde(default)]
    pub validation_file: Option<String>,
    #[serde(default)]
    pub training_file: Option<String>,
    #[serde(default)]
    pub hyperparameters: FineTuningHyperparameters,
    #[serde(default)]
    pub trained_tokens: Option<u64>,
}

/// Paginated list of fine-tuning jobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FineTuningJobList {
    pub object: String,
    pub data: Vec<FineTuningJob>,
    #[serde(default)]
    pub has_more: bool,
}

/// A fine-tuning job event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FineTuningEvent {
    pub object: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub level: String,
    pub message: String,
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
}

/// Paginated list of fine-tuning job events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FineTuningEventList {
    pub object: String,
    pub data: Vec<FineTuningEvent>,
    #[serde(default)]
    pub has_more: bool,
}
