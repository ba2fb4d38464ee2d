// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "is this request downloadable") lives in domain models
// that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseListingStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{AddonId, ListingId, RequestId};
use crate::domains::buyer::models::{Download, EnrichmentAddon, ListRequest};
use crate::domains::listings::catalog::RequestReceipt;
use crate::domains::listings::models::Listing;
use crate::domains::seller::models::{Earnings, Fulfillment, Payout, SellerRating};
use crate::domains::seller::PayoutError;

// =============================================================================
// Listing Store Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseListingStore: Send + Sync {
    /// Fetch the full listing collection.
    async fn fetch_all(&self) -> Result<Vec<Listing>>;

    /// Look up one listing. `None` when the ID is unknown.
    async fn find_by_id(&self, id: &ListingId) -> Result<Option<Listing>>;

    /// Add a listing (the caller has already validated it).
    async fn insert(&self, listing: Listing) -> Result<Listing>;

    /// Replace the listing with the same ID. `None` when the ID is unknown.
    async fn replace(&self, listing: Listing) -> Result<Option<Listing>>;

    /// Remove a listing. Returns whether anything was removed.
    async fn delete(&self, id: &ListingId) -> Result<bool>;

    /// Record a buyer's request for a listing. `None` when the ID is unknown.
    async fn record_request(&self, id: &ListingId) -> Result<Option<RequestReceipt>>;
}

// =============================================================================
// Buyer Dashboard Store Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseBuyerStore: Send + Sync {
    async fn list_requests(&self) -> Result<Vec<ListRequest>>;

    async fn find_request(&self, id: &RequestId) -> Result<Option<ListRequest>>;

    async fn addons(&self) -> Result<Vec<EnrichmentAddon>>;

    /// Flip an addon's selection. `None` when the ID is unknown.
    async fn toggle_addon(&self, id: &AddonId) -> Result<Option<EnrichmentAddon>>;

    async fn downloads(&self) -> Result<Vec<Download>>;

    /// Append a delivered export to the buyer's downloads.
    async fn add_download(&self, download: Download) -> Result<Download>;
}

// =============================================================================
// Seller Dashboard Store Trait (Infrastructure)
// =============================================================================

#[async_trait]
pub trait BaseSellerStore: Send + Sync {
    async fn earnings(&self) -> Result<Earnings>;

    async fn rating(&self) -> Result<SellerRating>;

    async fn fulfillment(&self) -> Result<Fulfillment>;

    /// Pay out the pending balance (see `Earnings::request_payout`).
    async fn request_payout(&self) -> Result<Payout, PayoutError>;
}
