//! Product catalog API

use shared::models::{Product, ProductPayload};
use shared::response::ProductListResponse;

use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// Paginated product list with an optional search query.
    pub async fn list_products(
        &self,
        page: u32,
        limit: u32,
        query: &str,
    ) -> ClientResult<ProductListResponse> {
        self.get_json(self.catalog_url(&format!(
            "/api/products?page={}&limit={}&q={}",
            page,
            limit,
            urlencoding::encode(query)
        )))
        .await
    }

    /// Full product aggregate by id.
    pub async fn product(&self, id: i64) -> ClientResult<Product> {
        self.get_json(self.catalog_url(&format!("/api/products/{}", id)))
            .await
    }

    /// Apply an action-tagged product edit in a single call.
    ///
    /// The server performs every create/update/delete/keep in the
    /// payload and returns the resulting aggregate.
    pub async fn process_product(&self, payload: &ProductPayload) -> ClientResult<Product> {
        tracing::debug!(
            action = ?payload.action,
            images = payload.images.len(),
            variances = payload.variances.len(),
            "processing product"
        );
        self.post_json(self.catalog_url("/api/products/process"), payload)
            .await
    }
}
