//! HTTP API Layer
//!
//! This crate exposes document formatting, lead validation and campaign
//! submissions over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for documents, leads and campaigns
//! - **Middleware**: Locale negotiation, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent, localized error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config, Catalog::load()?);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_lead::Catalog;

use crate::config::ApiConfig;
use crate::handlers::{campaigns, documents, health, leads};
use crate::middleware::{audit_middleware, locale_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub catalog: Arc<Catalog>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
/// * `catalog` - Localized message catalog
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig, catalog: Catalog) -> Router {
    let state = AppState {
        config: Arc::new(config),
        catalog: Arc::new(catalog),
    };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let document_routes = Router::new()
        .route("/format", post(documents::format_document))
        .route("/validate", post(documents::validate_document));

    let lead_routes = Router::new().route("/validate", post(leads::validate_lead));

    let campaign_routes = Router::new()
        .route("/:campaign", get(campaigns::get_campaign))
        .route("/:campaign/submissions", post(campaigns::create_submission));

    // Locale is negotiated before the audit layer so it shows up in the log
    let api_routes = Router::new()
        .nest("/documents", document_routes)
        .nest("/leads", lead_routes)
        .nest("/campaigns", campaign_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), locale_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
