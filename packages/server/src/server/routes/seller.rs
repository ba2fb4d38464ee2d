//! Seller dashboard routes: earnings, ratings, fulfillment, payout.

use axum::extract::State;
use axum::Json;

use crate::common::format_cents;
use crate::domains::seller::models::{Earnings, Fulfillment, Payout, SellerRating};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// `GET /api/seller/earnings`
pub async fn earnings(State(state): State<AxumAppState>) -> Result<Json<Earnings>, ApiError> {
    Ok(Json(state.deps.seller_store.earnings().await?))
}

/// `GET /api/seller/ratings`
pub async fn ratings(State(state): State<AxumAppState>) -> Result<Json<SellerRating>, ApiError> {
    Ok(Json(state.deps.seller_store.rating().await?))
}

/// `GET /api/seller/fulfillment`
pub async fn fulfillment(
    State(state): State<AxumAppState>,
) -> Result<Json<Fulfillment>, ApiError> {
    Ok(Json(state.deps.seller_store.fulfillment().await?))
}

/// `POST /api/seller/payout` - pay out the pending balance.
pub async fn request_payout(State(state): State<AxumAppState>) -> Result<Json<Payout>, ApiError> {
    let payout = state.deps.seller_store.request_payout().await?;
    tracing::info!(amount = %format_cents(payout.amount_cents), "Payout requested");
    Ok(Json(payout))
}
