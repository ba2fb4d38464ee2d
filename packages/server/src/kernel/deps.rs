//! Server dependencies for routes (using traits for testability)
//!
//! This module provides the central dependency container used by all HTTP
//! routes. All data access goes through trait abstractions to enable testing.

use std::sync::Arc;

use crate::kernel::{BaseBuyerStore, BaseListingStore, BaseSellerStore};

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to routes (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub listing_store: Arc<dyn BaseListingStore>,
    pub buyer_store: Arc<dyn BaseBuyerStore>,
    pub seller_store: Arc<dyn BaseSellerStore>,
}

impl ServerDeps {
    pub fn new(
        listing_store: Arc<dyn BaseListingStore>,
        buyer_store: Arc<dyn BaseBuyerStore>,
        seller_store: Arc<dyn BaseSellerStore>,
    ) -> Self {
        Self {
            listing_store,
            buyer_store,
            seller_store,
        }
    }
}
