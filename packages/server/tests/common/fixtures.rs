//! Test fixtures for creating test data.
//!
//! These fixtures use the model types directly to create test data.

use chrono::NaiveDate;
use server_core::common::{ListingId, SellerId};
use server_core::domains::listings::models::{
    Listing, ListingMetadata, ListingStats, Seller, VolumeBucket,
};

/// Create a verified test listing with sensible defaults.
pub fn test_listing(id: &str, title: &str, industry: &str) -> Listing {
    Listing {
        id: ListingId::from_string(id),
        title: title.to_string(),
        description: format!("{} description", title),
        industry: industry.to_string(),
        job_title: "C-Level".to_string(),
        volume: VolumeBucket::OneKToFiveK,
        list_type: "Email".to_string(),
        price_cents: 5000,
        is_verified: true,
        seller: Seller {
            id: SellerId::from_string("seller1"),
            name: "DataPro Solutions".to_string(),
            rating: 4.8,
        },
        metadata: ListingMetadata {
            niche: industry.to_string(),
            source: "LinkedIn API".to_string(),
            freshness: "Updated Daily".to_string(),
            exclusivity_level: "Premium".to_string(),
        },
        stats: ListingStats {
            rating: 4.8,
            last_sold_count: 45,
            quality_score: 92,
            total_count: 1000,
            remaining_count: 5,
            last_updated: NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid fixture date"),
        },
        preview_records: Vec::new(),
    }
}

/// The two-listing scenario set: one verified Technology listing and one
/// unverified Healthcare listing.
pub fn two_listing_set() -> Vec<Listing> {
    let mut healthcare = test_listing("2", "Healthcare List", "Healthcare");
    healthcare.is_verified = false;
    vec![test_listing("1", "Tech CEOs", "Technology"), healthcare]
}
