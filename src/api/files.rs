//! File endpoints
//!
//! Upload, list, retrieve, and delete files used as fine-tuning data.

use crate::client::Client;
use crate::constants::purpose;
use crate::error::Error;
use crate::models::files::{DeleteFileResponse, File, FileList};
use reqwest::Method;
use reqwest::multipart::{Form, Part};

impl Client {
    /// List all files belonging to the organization
    pub async fn list_files(&self) -> Result<FileList, Error> {
        let builder = self.request(Method::GET, "/files");
        self.send(builder).await
    }

    /// Upload a file for fine-tuning
    ///
    /// The file is sent as a multipart form with purpose `fine-tune`; the
    /// content is expected to be JSONL training data.
    pub async fn upload_file(
        &self,
        filename: impl Into<String>,
        data: Vec<u8>,
    ) -> Result<File, Error> {
        let part = Part::bytes(data).file_name(filename.into());
        let form = Form::new()
            .text("purpose", purpose::FINE_TUNE)
            .part("file", part);

        let builder = self.request(Method::POST, "/files").multipart(form);
        self.send(builder).await
    }

    /// Retrieve metadata for a single file
    pub async fn retrieve_file(&self, file_id: &str) -> Result<File, Error> {
        let builder = self.request(Method::GET, &format!("/files/{file_id}"));
        self.send(builder).await
    }

    /// Retrieve the raw content of a file
    ///
    /// The endpoint serves the stored file bytes as-is (JSONL for fine-tune
    /// files), so the body is returned verbatim.
    pub async fn retrieve_file_content(&self, file_id: &str) -> Result<String, Error> {
        let builder = self.request(Method::GET, &format!("/files/{file_id}/content"));
        self.send_text(builder).await
    }

    /// Delete a file
    pub async fn delete_file(&self, file_id: &str) -> Result<DeleteFileResponse, Error> {
        let builder = self.request(Method::DELETE, &format!("/files/{file_id}"));
        self.send(builder).await
    }
}
