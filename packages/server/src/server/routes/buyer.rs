//! Buyer dashboard routes: list requests, enrichment add-ons, downloads.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use crate::common::{AddonId, RequestId};
use crate::domains::buyer::models::{Download, EnrichmentAddon, ListRequest};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// `GET /api/buyer/requests`
pub async fn list_requests(
    State(state): State<AxumAppState>,
) -> Result<Json<Vec<ListRequest>>, ApiError> {
    Ok(Json(state.deps.buyer_store.list_requests().await?))
}

/// `GET /api/buyer/addons`
pub async fn addons(
    State(state): State<AxumAppState>,
) -> Result<Json<Vec<EnrichmentAddon>>, ApiError> {
    Ok(Json(state.deps.buyer_store.addons().await?))
}

/// `GET /api/buyer/downloads`
pub async fn downloads(
    State(state): State<AxumAppState>,
) -> Result<Json<Vec<Download>>, ApiError> {
    Ok(Json(state.deps.buyer_store.downloads().await?))
}

/// `POST /api/buyer/addons/:id/toggle` - flip an addon's selection.
pub async fn toggle_addon(
    State(state): State<AxumAppState>,
    Path(id): Path<AddonId>,
) -> Result<Json<EnrichmentAddon>, ApiError> {
    let addon = state
        .deps
        .buyer_store
        .toggle_addon(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("addon {}", id)))?;
    tracing::info!(addon_id = %addon.id, selected = addon.selected, "Addon toggled");
    Ok(Json(addon))
}

/// `POST /api/buyer/requests/:id/download` - export an approved request.
pub async fn download_list(
    State(state): State<AxumAppState>,
    Path(id): Path<RequestId>,
) -> Result<Json<Download>, ApiError> {
    let request = state
        .deps
        .buyer_store
        .find_request(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("request {}", id)))?;
    request.ensure_downloadable()?;

    let download = state
        .deps
        .buyer_store
        .add_download(Download::for_request(&request, Utc::now()))
        .await?;
    tracing::info!(request_id = %id, download_id = %download.id, "List downloaded");
    Ok(Json(download))
}
