//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{buyer, health_handler, listings, seller};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// All data access goes through the stores in [`ServerDeps`]; handlers are
/// stateless beyond that.
pub fn build_app(deps: Arc<ServerDeps>, allowed_origins: Vec<String>) -> Router {
    let app_state = AxumAppState { deps };

    // CORS configuration - explicit origins when configured, any origin for
    // development
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Rate limiting configuration
    // 10 requests per second per IP with bursts up to 20
    let rate_limit_config = std::sync::Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10) // Base rate: 10 requests per second
            .burst_size(20) // Allow bursts up to 20
            .use_headers() // Extract IP from X-Forwarded-For header
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    Router::new()
        // Listings
        .route(
            "/api/listings",
            get(listings::search_listings).post(listings::create_listing),
        )
        .route(
            "/api/listings/:id",
            get(listings::get_listing)
                .patch(listings::update_listing)
                .delete(listings::delete_listing),
        )
        .route("/api/listings/:id/request", post(listings::request_listing))
        // Buyer dashboard
        .route("/api/buyer/requests", get(buyer::list_requests))
        .route(
            "/api/buyer/requests/:id/download",
            post(buyer::download_list),
        )
        .route("/api/buyer/addons", get(buyer::addons))
        .route("/api/buyer/addons/:id/toggle", post(buyer::toggle_addon))
        .route("/api/buyer/downloads", get(buyer::downloads))
        // Seller dashboard
        .route("/api/seller/earnings", get(seller::earnings))
        .route("/api/seller/ratings", get(seller::ratings))
        .route("/api/seller/fulfillment", get(seller::fulfillment))
        .route("/api/seller/payout", post(seller::request_payout))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(rate_limit_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
