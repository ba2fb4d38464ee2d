//! In-memory store adapters.
//!
//! The marketplace runs entirely from seed data held in memory: collections
//! live behind `RwLock`s for the process lifetime and mutations never touch
//! disk. The same adapters back the server binary and the test suites.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::common::{AddonId, ListingId, RequestId};
use crate::domains::buyer::data::seed as buyer_seed;
use crate::domains::buyer::models::{Download, EnrichmentAddon, ListRequest};
use crate::domains::listings::catalog::RequestReceipt;
use crate::domains::listings::data::seed as listing_seed;
use crate::domains::listings::models::Listing;
use crate::domains::seller::data::seed as seller_seed;
use crate::domains::seller::models::{Earnings, Fulfillment, Payout, SellerRating};
use crate::domains::seller::PayoutError;

use super::traits::{BaseBuyerStore, BaseListingStore, BaseSellerStore};

// =============================================================================
// Listing store
// =============================================================================

pub struct MemoryListingStore {
    listings: RwLock<Vec<Listing>>,
}

impl MemoryListingStore {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: RwLock::new(listings),
        }
    }

    /// Store preloaded with the built-in sample catalog.
    pub fn seeded() -> Self {
        Self::new(listing_seed::builtin_listings())
    }
}

#[async_trait]
impl BaseListingStore for MemoryListingStore {
    async fn fetch_all(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.read().await.clone())
    }

    async fn find_by_id(&self, id: &ListingId) -> Result<Option<Listing>> {
        let listings = self.listings.read().await;
        Ok(listings.iter().find(|l| &l.id == id).cloned())
    }

    async fn insert(&self, listing: Listing) -> Result<Listing> {
        let mut listings = self.listings.write().await;
        if listings.iter().any(|l| l.id == listing.id) {
            anyhow::bail!("listing {} already exists", listing.id);
        }
        listings.push(listing.clone());
        Ok(listing)
    }

    async fn replace(&self, listing: Listing) -> Result<Option<Listing>> {
        let mut listings = self.listings.write().await;
        match listings.iter_mut().find(|l| l.id == listing.id) {
            Some(slot) => {
                *slot = listing.clone();
                Ok(Some(listing))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &ListingId) -> Result<bool> {
        let mut listings = self.listings.write().await;
        let before = listings.len();
        listings.retain(|l| &l.id != id);
        Ok(listings.len() < before)
    }

    async fn record_request(&self, id: &ListingId) -> Result<Option<RequestReceipt>> {
        let listings = self.listings.read().await;
        Ok(listings.iter().find(|l| &l.id == id).map(|listing| {
            RequestReceipt {
                listing_id: listing.id.clone(),
                title: listing.title.clone(),
                requested_at: Utc::now(),
            }
        }))
    }
}

// =============================================================================
// Buyer dashboard store
// =============================================================================

pub struct MemoryBuyerStore {
    requests: RwLock<Vec<ListRequest>>,
    addons: RwLock<Vec<EnrichmentAddon>>,
    downloads: RwLock<Vec<Download>>,
}

impl MemoryBuyerStore {
    pub fn new(
        requests: Vec<ListRequest>,
        addons: Vec<EnrichmentAddon>,
        downloads: Vec<Download>,
    ) -> Self {
        Self {
            requests: RwLock::new(requests),
            addons: RwLock::new(addons),
            downloads: RwLock::new(downloads),
        }
    }

    /// Store preloaded with the sample buyer dashboard.
    pub fn seeded() -> Self {
        Self::new(
            buyer_seed::list_requests(),
            buyer_seed::enrichment_addons(),
            buyer_seed::downloads(),
        )
    }
}

#[async_trait]
impl BaseBuyerStore for MemoryBuyerStore {
    async fn list_requests(&self) -> Result<Vec<ListRequest>> {
        Ok(self.requests.read().await.clone())
    }

    async fn find_request(&self, id: &RequestId) -> Result<Option<ListRequest>> {
        let requests = self.requests.read().await;
        Ok(requests.iter().find(|r| &r.id == id).cloned())
    }

    async fn addons(&self) -> Result<Vec<EnrichmentAddon>> {
        Ok(self.addons.read().await.clone())
    }

    async fn toggle_addon(&self, id: &AddonId) -> Result<Option<EnrichmentAddon>> {
        let mut addons = self.addons.write().await;
        Ok(addons.iter_mut().find(|a| &a.id == id).map(|addon| {
            addon.toggle();
            addon.clone()
        }))
    }

    async fn downloads(&self) -> Result<Vec<Download>> {
        Ok(self.downloads.read().await.clone())
    }

    async fn add_download(&self, download: Download) -> Result<Download> {
        self.downloads.write().await.push(download.clone());
        Ok(download)
    }
}

// =============================================================================
// Seller dashboard store
// =============================================================================

pub struct MemorySellerStore {
    earnings: RwLock<Earnings>,
    rating: SellerRating,
    fulfillment: Fulfillment,
}

impl MemorySellerStore {
    pub fn new(earnings: Earnings, rating: SellerRating, fulfillment: Fulfillment) -> Self {
        Self {
            earnings: RwLock::new(earnings),
            rating,
            fulfillment,
        }
    }

    /// Store preloaded with the sample seller dashboard.
    pub fn seeded() -> Self {
        Self::new(
            seller_seed::earnings(),
            seller_seed::rating(),
            seller_seed::fulfillment(),
        )
    }
}

#[async_trait]
impl BaseSellerStore for MemorySellerStore {
    async fn earnings(&self) -> Result<Earnings> {
        Ok(self.earnings.read().await.clone())
    }

    async fn rating(&self) -> Result<SellerRating> {
        Ok(self.rating.clone())
    }

    async fn fulfillment(&self) -> Result<Fulfillment> {
        Ok(self.fulfillment.clone())
    }

    async fn request_payout(&self) -> Result<Payout, PayoutError> {
        let mut earnings = self.earnings.write().await;
        earnings.request_payout(Utc::now())
    }
}
