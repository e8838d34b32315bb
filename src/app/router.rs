use axum::{
    extract::DefaultBodyLimit,
    http::{header::InvalidHeaderValue, HeaderValue},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

use crate::{avatars, AppState};

use super::controller;

pub fn build_router(state: AppState) -> Result<Router, InvalidHeaderValue> {
    let cors = cors_layer(&state.envy.cors_origin)?;
    let max_upload_bytes = state.envy.max_upload_bytes;

    let router = Router::new()
        // app
        .route("/health", get(controller::get_health))
        .route("/rate-limit-status", get(controller::get_rate_limit_status))
        // avatars
        .route(
            "/generate-avatar",
            post(avatars::controller::generate_avatar),
        )
        .with_state(state)
        // layers
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    Ok(router)
}

// credentials rule out wildcards, so methods and headers are mirrored instead
fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = origin.parse::<HeaderValue>()?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
