use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::{ListingId, SellerId};

/// Listing - a purchasable contact-data list shown in the marketplace.
///
/// This is the one canonical schema; every listing entering the system (seed
/// file, create, update) is validated against it before it is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,

    // Content
    pub title: String,
    pub description: String,

    // Filter keys
    pub industry: String,
    pub job_title: String,
    pub volume: VolumeBucket,
    pub list_type: String,

    /// Price in integer US cents.
    pub price_cents: i64,

    // Trust
    pub is_verified: bool,

    pub seller: Seller,
    pub metadata: ListingMetadata,
    pub stats: ListingStats,

    /// Sample rows shown before purchase.
    #[serde(default)]
    pub preview_records: Vec<PreviewRecord>,
}

/// The seller a listing belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    /// Marketplace rating, 0.0 to 5.0.
    pub rating: f64,
}

/// Free-text provenance fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingMetadata {
    pub niche: String,
    pub source: String,
    pub freshness: String,
    pub exclusivity_level: String,
}

/// Display counters for a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingStats {
    /// Listing rating, 0.0 to 5.0.
    pub rating: f64,
    pub last_sold_count: u32,
    /// Quality score, 0 to 100.
    pub quality_score: u8,
    pub total_count: u32,
    /// Exclusive copies still available. Never exceeds `total_count`.
    pub remaining_count: u32,
    pub last_updated: NaiveDate,
}

/// One sample contact row from a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRecord {
    pub name: String,
    pub title: String,
    pub company: String,
    pub email: String,
}

// =============================================================================
// Volume buckets
// =============================================================================

/// Lead-count bucket a listing is sold under.
///
/// Buckets are exact categorical values; filtering compares bucket identity,
/// never numeric ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeBucket {
    #[serde(rename = "0-1000")]
    ZeroToOneK,
    #[serde(rename = "1000-5000")]
    OneKToFiveK,
    #[serde(rename = "5000-10000")]
    FiveKToTenK,
    #[serde(rename = "10000+")]
    TenKPlus,
}

impl std::fmt::Display for VolumeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolumeBucket::ZeroToOneK => write!(f, "0-1000"),
            VolumeBucket::OneKToFiveK => write!(f, "1000-5000"),
            VolumeBucket::FiveKToTenK => write!(f, "5000-10000"),
            VolumeBucket::TenKPlus => write!(f, "10000+"),
        }
    }
}

impl std::str::FromStr for VolumeBucket {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "0-1000" => Ok(VolumeBucket::ZeroToOneK),
            "1000-5000" => Ok(VolumeBucket::OneKToFiveK),
            "5000-10000" => Ok(VolumeBucket::FiveKToTenK),
            "10000+" => Ok(VolumeBucket::TenKPlus),
            _ => Err(anyhow::anyhow!("Invalid volume bucket: {}", s)),
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// A rule violated by a listing entering the system.
#[derive(Debug, Error)]
pub enum ListingValidationError {
    #[error("listing id must not be empty")]
    EmptyId,

    #[error("listing {0}: title must not be empty")]
    EmptyTitle(ListingId),

    #[error("listing {0}: description must not be empty")]
    EmptyDescription(ListingId),

    #[error("listing {id}: price must not be negative (got {price_cents})")]
    NegativePrice { id: ListingId, price_cents: i64 },

    #[error("listing {0}: seller id must not be empty")]
    EmptySellerId(ListingId),

    #[error("listing {0}: seller name must not be empty")]
    EmptySellerName(ListingId),

    #[error("listing {id}: seller rating {rating} is outside 0.0-5.0")]
    SellerRatingOutOfRange { id: ListingId, rating: f64 },

    #[error("listing {id}: rating {rating} is outside 0.0-5.0")]
    RatingOutOfRange { id: ListingId, rating: f64 },

    #[error("listing {id}: quality score {score} exceeds 100")]
    QualityScoreOutOfRange { id: ListingId, score: u8 },

    #[error("listing {id}: remaining count {remaining} exceeds total count {total}")]
    RemainingExceedsTotal {
        id: ListingId,
        remaining: u32,
        total: u32,
    },
}

fn rating_in_range(rating: f64) -> bool {
    (0.0..=5.0).contains(&rating)
}

impl Listing {
    /// Check every schema invariant. Called at the boundary: seed load,
    /// create, and update. The filter pipeline assumes validated input.
    pub fn validate(&self) -> Result<(), ListingValidationError> {
        if self.id.is_empty() {
            return Err(ListingValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ListingValidationError::EmptyTitle(self.id.clone()));
        }
        if self.description.trim().is_empty() {
            return Err(ListingValidationError::EmptyDescription(self.id.clone()));
        }
        if self.price_cents < 0 {
            return Err(ListingValidationError::NegativePrice {
                id: self.id.clone(),
                price_cents: self.price_cents,
            });
        }
        if self.seller.id.is_empty() {
            return Err(ListingValidationError::EmptySellerId(self.id.clone()));
        }
        if self.seller.name.trim().is_empty() {
            return Err(ListingValidationError::EmptySellerName(self.id.clone()));
        }
        if !rating_in_range(self.seller.rating) {
            return Err(ListingValidationError::SellerRatingOutOfRange {
                id: self.id.clone(),
                rating: self.seller.rating,
            });
        }
        if !rating_in_range(self.stats.rating) {
            return Err(ListingValidationError::RatingOutOfRange {
                id: self.id.clone(),
                rating: self.stats.rating,
            });
        }
        if self.stats.quality_score > 100 {
            return Err(ListingValidationError::QualityScoreOutOfRange {
                id: self.id.clone(),
                score: self.stats.quality_score,
            });
        }
        if self.stats.remaining_count > self.stats.total_count {
            return Err(ListingValidationError::RemainingExceedsTotal {
                id: self.id.clone(),
                remaining: self.stats.remaining_count,
                total: self.stats.total_count,
            });
        }
        Ok(())
    }

    /// Build a listing from client-supplied fields, minting a fresh ID.
    pub fn create(new: NewListing) -> Result<Self, ListingValidationError> {
        let listing = Listing {
            id: ListingId::new(),
            title: new.title,
            description: new.description,
            industry: new.industry,
            job_title: new.job_title,
            volume: new.volume,
            list_type: new.list_type,
            price_cents: new.price_cents,
            is_verified: new.is_verified,
            seller: new.seller,
            metadata: new.metadata,
            stats: new.stats,
            preview_records: new.preview_records,
        };
        listing.validate()?;
        Ok(listing)
    }

    /// Apply a partial update, keeping current values where the patch is
    /// silent, then re-validate the result.
    pub fn apply_patch(&self, patch: ListingPatch) -> Result<Self, ListingValidationError> {
        let mut updated = self.clone();
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(description) = patch.description {
            updated.description = description;
        }
        if let Some(industry) = patch.industry {
            updated.industry = industry;
        }
        if let Some(job_title) = patch.job_title {
            updated.job_title = job_title;
        }
        if let Some(volume) = patch.volume {
            updated.volume = volume;
        }
        if let Some(list_type) = patch.list_type {
            updated.list_type = list_type;
        }
        if let Some(price_cents) = patch.price_cents {
            updated.price_cents = price_cents;
        }
        if let Some(is_verified) = patch.is_verified {
            updated.is_verified = is_verified;
        }
        if let Some(metadata) = patch.metadata {
            updated.metadata = metadata;
        }
        if let Some(stats) = patch.stats {
            updated.stats = stats;
        }
        updated.validate()?;
        Ok(updated)
    }
}

/// Client-supplied fields for creating a listing (everything but the ID).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub industry: String,
    pub job_title: String,
    pub volume: VolumeBucket,
    pub list_type: String,
    pub price_cents: i64,
    pub is_verified: bool,
    pub seller: Seller,
    pub metadata: ListingMetadata,
    pub stats: ListingStats,
    #[serde(default)]
    pub preview_records: Vec<PreviewRecord>,
}

/// Partial update for a listing. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub job_title: Option<String>,
    pub volume: Option<VolumeBucket>,
    pub list_type: Option<String>,
    pub price_cents: Option<i64>,
    pub is_verified: Option<bool>,
    pub metadata: Option<ListingMetadata>,
    pub stats: Option<ListingStats>,
}
