//! Listing routes: search, CRUD, and list requests.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::common::ListingId;
use crate::domains::listings::catalog::RequestReceipt;
use crate::domains::listings::models::{
    FilterState, Listing, ListingPatch, NewListing, PriceRange, VolumeSelection,
};
use crate::domains::listings::search;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// Query parameters for `GET /api/listings`.
///
/// Multi-select fields take comma-separated values, e.g.
/// `?industry=Technology,Finance&verified=true&q=tech%20ceo`.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub q: Option<String>,
    pub industry: Option<String>,
    pub job_title: Option<String>,
    pub list_type: Option<String>,
    pub volume: Option<String>,
    pub verified: Option<bool>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub min_quality: Option<u8>,
}

fn split_csv(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

impl ListingQuery {
    /// Translate wire parameters into the search query and filter state.
    fn into_criteria(self) -> Result<(String, FilterState), ApiError> {
        let volume = match self.volume {
            Some(raw) => raw
                .parse::<VolumeSelection>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
            None => VolumeSelection::Any,
        };
        let price_range = if self.price_min.is_some() || self.price_max.is_some() {
            Some(PriceRange {
                min_cents: self.price_min.unwrap_or(0),
                max_cents: self.price_max.unwrap_or(i64::MAX),
            })
        } else {
            None
        };
        let filters = FilterState {
            industries: split_csv(self.industry),
            job_titles: split_csv(self.job_title),
            list_types: split_csv(self.list_type),
            volume,
            verified_sellers: self.verified.unwrap_or(false),
            price_range,
            min_quality_score: self.min_quality,
        };
        Ok((self.q.unwrap_or_default(), filters))
    }
}

/// `GET /api/listings` - all listings matching the query and filters.
pub async fn search_listings(
    State(state): State<AxumAppState>,
    Query(params): Query<ListingQuery>,
) -> Result<Json<Vec<Listing>>, ApiError> {
    let (query, filters) = params.into_criteria()?;
    let listings = state.deps.listing_store.fetch_all().await?;
    let visible = search::apply(&listings, &query, &filters);
    tracing::debug!(
        total = listings.len(),
        visible = visible.len(),
        query = %query,
        "Listing search"
    );
    Ok(Json(visible))
}

/// `GET /api/listings/:id`
pub async fn get_listing(
    State(state): State<AxumAppState>,
    Path(id): Path<ListingId>,
) -> Result<Json<Listing>, ApiError> {
    let listing = state
        .deps
        .listing_store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("listing {}", id)))?;
    Ok(Json(listing))
}

/// `POST /api/listings`
pub async fn create_listing(
    State(state): State<AxumAppState>,
    Json(new): Json<NewListing>,
) -> Result<(StatusCode, Json<Listing>), ApiError> {
    let listing = Listing::create(new)?;
    let listing = state.deps.listing_store.insert(listing).await?;
    tracing::info!(listing_id = %listing.id, title = %listing.title, "Listing created");
    Ok((StatusCode::CREATED, Json(listing)))
}

/// `PATCH /api/listings/:id`
pub async fn update_listing(
    State(state): State<AxumAppState>,
    Path(id): Path<ListingId>,
    Json(patch): Json<ListingPatch>,
) -> Result<Json<Listing>, ApiError> {
    let current = state
        .deps
        .listing_store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("listing {}", id)))?;
    let updated = current.apply_patch(patch)?;
    let stored = state
        .deps
        .listing_store
        .replace(updated)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("listing {}", id)))?;
    tracing::info!(listing_id = %stored.id, "Listing updated");
    Ok(Json(stored))
}

/// `DELETE /api/listings/:id`
pub async fn delete_listing(
    State(state): State<AxumAppState>,
    Path(id): Path<ListingId>,
) -> Result<StatusCode, ApiError> {
    let removed = state.deps.listing_store.delete(&id).await?;
    if !removed {
        return Err(ApiError::NotFound(format!("listing {}", id)));
    }
    tracing::info!(listing_id = %id, "Listing deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/listings/:id/request` - request the list on behalf of the buyer.
pub async fn request_listing(
    State(state): State<AxumAppState>,
    Path(id): Path<ListingId>,
) -> Result<Json<RequestReceipt>, ApiError> {
    let receipt = state
        .deps
        .listing_store
        .record_request(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("listing {}", id)))?;
    tracing::info!(listing_id = %receipt.listing_id, "List requested");
    Ok(Json(receipt))
}
