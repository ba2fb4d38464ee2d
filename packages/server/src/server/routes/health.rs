use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    catalog: CatalogHealth,
}

#[derive(Serialize)]
pub struct CatalogHealth {
    status: String,
    listings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Checks that the listing store is reachable and reports the catalog size.
/// Returns 200 OK when healthy, 503 Service Unavailable otherwise.
pub async fn health_handler(
    State(state): State<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let catalog = match state.deps.listing_store.fetch_all().await {
        Ok(listings) => CatalogHealth {
            status: "ok".to_string(),
            listings: listings.len(),
            error: None,
        },
        Err(e) => CatalogHealth {
            status: "error".to_string(),
            listings: 0,
            error: Some(e.to_string()),
        },
    };

    let is_healthy = catalog.status == "ok";

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            catalog,
        }),
    )
}
