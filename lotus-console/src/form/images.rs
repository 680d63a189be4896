//! Image staging
//!
//! Current images are the kept snapshot entries (with server ids) plus
//! newly staged uploads (URL only, no id yet). Uploads run concurrently
//! and append in completion order; removal is by index. What the diff
//! against the snapshot means for the payload is decided at transform
//! time, not here.

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use lotus_client::{ClientError, HttpClient};
use shared::models::ProductImage;

#[derive(Debug, Clone, Default)]
pub struct ImageStaging {
    images: Vec<ProductImage>,
}

impl ImageStaging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(images: &[ProductImage]) -> Self {
        Self {
            images: images.to_vec(),
        }
    }

    pub fn images(&self) -> &[ProductImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Stage an already-hosted image.
    pub fn add_url(&mut self, url: impl Into<String>) {
        self.images.push(ProductImage {
            id: None,
            url: url.into(),
        });
    }

    /// Remove an image from the current list. Snapshot images removed
    /// here become delete-tagged at payload time.
    pub fn remove(&mut self, index: usize) -> Option<ProductImage> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// Upload files concurrently and stage each hosted URL as it
    /// arrives, in completion order. Uploads finished before a failure
    /// stay staged; the error is returned for the caller to surface.
    pub async fn stage_uploads(
        &mut self,
        client: &HttpClient,
        files: Vec<(String, Vec<u8>)>,
    ) -> Result<usize, ClientError> {
        let mut uploads: FuturesUnordered<_> = files
            .into_iter()
            .map(|(name, bytes)| async move { client.upload_image(&name, bytes).await })
            .collect();

        let mut staged = 0;
        while let Some(result) = uploads.next().await {
            match result {
                Ok(url) => {
                    self.add_url(url);
                    staged += 1;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "image upload failed");
                    return Err(e);
                }
            }
        }
        Ok(staged)
    }
}
