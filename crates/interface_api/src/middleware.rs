//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::{header::ACCEPT_LANGUAGE, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::info;

use domain_lead::Locale;

use crate::AppState;

/// Locale negotiation middleware
///
/// Picks the message locale from `Accept-Language` and stores it in the
/// request extensions for handlers.
pub async fn locale_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let default = state.config.default_locale;
    let locale = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|h| h.to_str().ok())
        .map_or(default, |header| Locale::negotiate(header, default));

    request.extensions_mut().insert(locale);
    next.run(request).await
}

/// Audit logging middleware
///
/// Logs every API request with its outcome and latency
pub async fn audit_middleware(
    State(_state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let locale = request.extensions().get::<Locale>().copied();

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        locale = ?locale,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
