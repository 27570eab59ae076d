//! Health check endpoint.

use axum::{extract::State, Json};

use crate::features::FeatureFlags;
use crate::rest::dto::HealthResponse;
use crate::rest::state::ApiState;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    let flags = FeatureFlags::from_config(&state.config.features);
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        step_count: state.resolver.registry().len(),
        reference_prefixes: flags
            .enabled_reference_types()
            .iter()
            .map(|kind| kind.starts_with().to_string())
            .collect(),
    })
}
