//! Listing visibility orchestration.
//!
//! [`Catalog`] owns one browsing session: the full collection fetched from
//! the listing store, the active search query and filter state, and the
//! derived visible set. Every input change reruns the predicate over the full
//! collection; there is no incremental update and no pagination.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::common::ListingId;
use crate::domains::listings::models::{FilterState, Listing};
use crate::domains::listings::search;
use crate::kernel::BaseListingStore;

/// Lifecycle of the catalog's one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogState {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Catalog operation failure. Fetch errors carry only a display message;
/// there is no transient/permanent taxonomy and no retry policy.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to fetch listings: {0}")]
    Fetch(String),

    #[error("listing {0} not found")]
    NotFound(ListingId),
}

/// Acknowledgement that a list request was recorded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestReceipt {
    pub listing_id: ListingId,
    pub title: String,
    pub requested_at: DateTime<Utc>,
}

pub struct Catalog {
    store: Arc<dyn BaseListingStore>,
    listings: Vec<Listing>,
    search_query: String,
    filters: FilterState,
    visible: Vec<Listing>,
    state: CatalogState,
}

impl Catalog {
    pub fn new(store: Arc<dyn BaseListingStore>) -> Self {
        Self {
            store,
            listings: Vec::new(),
            search_query: String::new(),
            filters: FilterState::default(),
            visible: Vec::new(),
            state: CatalogState::Idle,
        }
    }

    /// Fetch the full collection from the store.
    ///
    /// Drives `Idle -> Loading -> (Ready | Failed)`. On success the
    /// collection is replaced and the visible set recomputed; on failure the
    /// collection is cleared and the error message kept for the UI layer.
    pub async fn load(&mut self) -> Result<(), CatalogError> {
        self.state = CatalogState::Loading;
        match self.store.fetch_all().await {
            Ok(listings) => {
                tracing::info!(count = listings.len(), "Loaded listing catalog");
                self.listings = listings;
                self.state = CatalogState::Ready;
                self.recompute();
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load listing catalog");
                self.listings.clear();
                self.visible.clear();
                let message = e.to_string();
                self.state = CatalogState::Failed(message.clone());
                Err(CatalogError::Fetch(message))
            }
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.recompute();
    }

    pub fn apply_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.recompute();
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.recompute();
    }

    /// The current filtered collection: every listing matching the active
    /// query and filters, in store order.
    pub fn visible(&self) -> &[Listing] {
        &self.visible
    }

    /// The full, unfiltered collection.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Request a list on behalf of the buyer.
    ///
    /// The store acknowledges the request with a receipt; an unknown ID is
    /// the only failure a caller can provoke.
    pub async fn request_list(&self, id: &ListingId) -> Result<RequestReceipt, CatalogError> {
        let receipt = self
            .store
            .record_request(id)
            .await
            .map_err(|e| CatalogError::Fetch(e.to_string()))?
            .ok_or_else(|| CatalogError::NotFound(id.clone()))?;
        tracing::info!(listing_id = %receipt.listing_id, "List requested");
        Ok(receipt)
    }

    fn recompute(&mut self) {
        self.visible = search::apply(&self.listings, &self.search_query, &self.filters);
    }
}
