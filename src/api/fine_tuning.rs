//! Fine-tuning job endpoints
//!
//! Create, list, retrieve, and cancel remote training jobs, and page
//! through their event logs. Job progress is the server's business; this
//! client only issues the individual requests.

use crate::client::Client;
use crate::error::Error;
use crate::models::fine_tuning::{
    FineTuningEventList, FineTuningJob, FineTuningJobList, FineTuningRequest,
};
use reqwest::Method;

/// Build the `after`/`limit` pagination query pairs
fn pagination_query(after: Option<&str>, limit: Option<u32>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(after) = after {
        query.push(("after", after.to_string()));
    }
    if let Some(limit) = limit {
        query.push(("limit", limit.to_string()));
    }
    query
}

impl Client {
    /// Create a fine-tuning job
    pub async fn create_fine_tuning_job(
        &self,
        request: &FineTuningRequest,
    ) -> Result<FineTuningJob, Error> {
        let builder = self.request(Method::POST, "/fine_tuning/jobs").json(request);
        self.send(builder).await
    }

    /// List fine-tuning jobs, newest first
    ///
    /// `after` is a job ID cursor for pagination; `limit` caps the page
    /// size.
    pub async fn list_fine_tuning_jobs(
        &self,
        after: Option<&str>,
        limit: Option<u32>,
    ) -> Result<FineTuningJobList, Error> {
        let builder = self
            .request(Method::GET, "/fine_tuning/jobs")
            .query(&pagination_query(after, limit));
        self.send(builder).await
    }

    /// Retrieve a single fine-tuning job
    pub async fn retrieve_fine_tuning_job(&self, job_id: &str) -> Result<FineTuningJob, Error> {
        let builder = self.request(Method::GET, &format!("/fine_tuning/jobs/{job_id}"));
        self.send(builder).await
    }

    /// Cancel a running fine-tuning job
    pub async fn cancel_fine_tuning_job(&self, job_id: &str) -> Result<FineTuningJob, Error> {
        let builder = self.request(Method::POST, &format!("/fine_tuning/jobs/{job_id}/cancel"));
        self.send(builder).await
    }

    /// List events for a fine-tuning job
    pub async fn list_fine_tuning_events(
        &self,
        job_id: &str,
        after: Option<&str>,
        limit: Option<u32>,
    ) -> Result<FineTuningEventList, Error> {
        let builder = self
            .request(Method::GET, &format!("/fine_tuning/jobs/{job_id}/events"))
            .query(&pagination_query(after, limit));
        self.send(builder).await
    }
}
