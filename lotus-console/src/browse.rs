//! Product browsing
//!
//! Search-as-you-type over the paginated catalog. Keystrokes are
//! debounced, and every query/page change supersedes the previous
//! request generation through a cancellation token, so a stale response
//! can never overwrite newer state.

use std::sync::Arc;
use std::time::Duration;

use lotus_client::HttpClient;
use serde::Serialize;
use shared::models::Product;
use shared::response::Pagination;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error::{ConsoleError, FormError};
use crate::form::payload::whole_delete_payload;

/// Products per page
pub const PAGE_SIZE: u32 = 50;

/// Keystroke coalescing window
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Current list view, shared with whatever renders it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductListState {
    pub products: Vec<Product>,
    pub pagination: Option<Pagination>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct ProductBrowser {
    client: HttpClient,
    state: Arc<RwLock<ProductListState>>,
    query: String,
    page: u32,
    limit: u32,
    debounce: Duration,
    /// Token of the newest request generation; cancelled and replaced
    /// whenever the query or page changes.
    generation: CancellationToken,
}

impl ProductBrowser {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(ProductListState::default())),
            query: String::new(),
            page: 1,
            limit: PAGE_SIZE,
            debounce: SEARCH_DEBOUNCE,
            generation: CancellationToken::new(),
        }
    }

    /// Override the debounce window (tests).
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Shared handle to the list state.
    pub fn state(&self) -> Arc<RwLock<ProductListState>> {
        Arc::clone(&self.state)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Change the search query. Resets to page 1 and schedules a
    /// debounced refetch, superseding any in-flight request.
    pub fn set_query(&mut self, query: impl Into<String>) -> JoinHandle<()> {
        self.query = query.into();
        self.page = 1;
        self.schedule(self.debounce)
    }

    /// Jump to a page of the current query.
    pub fn set_page(&mut self, page: u32) -> JoinHandle<()> {
        self.page = page.max(1);
        self.schedule(self.debounce)
    }

    /// Refetch the current query/page immediately (no debounce).
    pub async fn refresh(&mut self) {
        self.supersede();
        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }
        let result = self.client.list_products(self.page, self.limit, &self.query).await;
        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(resp) => {
                state.products = resp.data;
                state.pagination = Some(resp.pagination);
                state.error = None;
            }
            Err(e) => {
                state.error = Some(e.to_string());
            }
        }
    }

    /// Delete a product through the sync endpoint.
    ///
    /// The id must refer to a product in the currently loaded list; a
    /// stale id is refused rather than turned into a blind delete. The
    /// full aggregate is re-fetched first so the delete payload covers
    /// every server-side image, variance and price.
    pub async fn delete_product(&mut self, id: i64) -> Result<(), ConsoleError> {
        let loaded = {
            let state = self.state.read().await;
            state.products.iter().any(|p| p.id == Some(id))
        };
        if !loaded {
            return Err(FormError::UnknownProduct(id).into());
        }

        let snapshot = self.client.product(id).await?;
        let payload = whole_delete_payload(&snapshot)?;
        self.client.process_product(&payload).await?;
        tracing::info!(product = id, "product deleted");

        self.refresh().await;
        Ok(())
    }

    /// Cancel the previous request generation and hand out the token of
    /// the new one.
    fn supersede(&mut self) -> CancellationToken {
        self.generation.cancel();
        self.generation = CancellationToken::new();
        self.generation.clone()
    }

    fn schedule(&mut self, delay: Duration) -> JoinHandle<()> {
        let token = self.supersede();
        let client = self.client.clone();
        let state = Arc::clone(&self.state);
        let query = self.query.clone();
        let (page, limit) = (self.page, self.limit);

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(delay) => {}
            }

            {
                let mut state = state.write().await;
                state.loading = true;
                state.error = None;
            }

            let result = tokio::select! {
                _ = token.cancelled() => return,
                res = client.list_products(page, limit, &query) => res,
            };

            // the generation may have been superseded while the response
            // was in flight
            if token.is_cancelled() {
                return;
            }

            let mut state = state.write().await;
            state.loading = false;
            match result {
                Ok(resp) => {
                    state.products = resp.data;
                    state.pagination = Some(resp.pagination);
                    state.error = None;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "product search failed");
                    state.error = Some(e.to_string());
                }
            }
        })
    }
}
