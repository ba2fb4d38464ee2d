pub mod catalog;
pub mod data;
pub mod models;
pub mod search;

// Re-export the orchestrator
pub use catalog::{Catalog, CatalogError, CatalogState, RequestReceipt};

// Re-export models (domain models)
pub use models::filter::{FilterState, PriceRange, VolumeSelection};
pub use models::listing::{
    Listing, ListingMetadata, ListingPatch, ListingStats, ListingValidationError, NewListing,
    PreviewRecord, Seller, VolumeBucket,
};
