//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::common::{ListingId, SellerId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let listing_id: ListingId = ListingId::from_string("1");
//! let seller_id: SellerId = SellerId::from_string("seller1");
//!
//! // This would be a compile error:
//! // let wrong: SellerId = listing_id;
//! ```

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Listing entities (purchasable data lists).
pub struct ListingEntity;

/// Marker type for Seller entities (listing owners).
pub struct SellerEntity;

/// Marker type for ListRequest entities (buyer purchase requests).
pub struct ListRequestEntity;

/// Marker type for EnrichmentAddon entities (per-lead enrichment options).
pub struct EnrichmentAddonEntity;

/// Marker type for Download entities (delivered list files).
pub struct DownloadEntity;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Listing entities.
pub type ListingId = Id<ListingEntity>;

/// Typed ID for Seller entities.
pub type SellerId = Id<SellerEntity>;

/// Typed ID for ListRequest entities.
pub type RequestId = Id<ListRequestEntity>;

/// Typed ID for EnrichmentAddon entities.
pub type AddonId = Id<EnrichmentAddonEntity>;

/// Typed ID for Download entities.
pub type DownloadId = Id<DownloadEntity>;
