//! Image upload API
//!
//! Multipart upload returning a hosted URL. The staged image then rides
//! along in the sync payload as a create-tagged URL entry.

use reqwest::multipart::{Form, Part};
use shared::models::UploadResponse;

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Upload one image file, returning its hosted URL.
    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<String> {
        let mime = mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(&mime)?;
        let form = Form::new().part("file", part);

        let resp: UploadResponse = self
            .post_multipart(self.catalog_url("/api/upload"), form)
            .await?;
        Ok(resp.url)
    }
}
