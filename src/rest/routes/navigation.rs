//! Next/previous step resolution endpoints.

use axum::{extract::State, Json};

use crate::navigation::Direction;
use crate::rest::dto::{NavigationRequest, NavigationResponse};
use crate::rest::error::{ApiError, ErrorResponse};
use crate::rest::state::ApiState;

/// Resolve the step after the given one
#[utoipa::path(
    post,
    path = "/api/v1/navigation/next",
    tag = "Navigation",
    request_body = NavigationRequest,
    responses(
        (status = 200, description = "Redirect destination", body = NavigationResponse),
        (status = 404, description = "Step not found", body = ErrorResponse),
        (status = 503, description = "Navigation could not be resolved", body = ErrorResponse)
    )
)]
pub async fn next(
    State(state): State<ApiState>,
    Json(request): Json<NavigationRequest>,
) -> Result<Json<NavigationResponse>, ApiError> {
    resolve(&state, &request, Direction::Forward)
}

/// Resolve the step before the given one
#[utoipa::path(
    post,
    path = "/api/v1/navigation/previous",
    tag = "Navigation",
    request_body = NavigationRequest,
    responses(
        (status = 200, description = "Back link destination", body = NavigationResponse),
        (status = 404, description = "Step not found", body = ErrorResponse),
        (status = 503, description = "Navigation could not be resolved", body = ErrorResponse)
    )
)]
pub async fn previous(
    State(state): State<ApiState>,
    Json(request): Json<NavigationRequest>,
) -> Result<Json<NavigationResponse>, ApiError> {
    resolve(&state, &request, Direction::Backward)
}

fn resolve(
    state: &ApiState,
    request: &NavigationRequest,
    direction: Direction,
) -> Result<Json<NavigationResponse>, ApiError> {
    let step = state
        .resolver
        .registry()
        .find_by_name(&request.step)
        .map(|node| node.id())
        .ok_or_else(|| ApiError::NotFound(format!("Step '{}' not found", request.step)))?;

    let destination = state
        .resolver
        .resolve(step, direction, request.path_parameters.as_slice())?;

    Ok(Json(NavigationResponse::from(destination)))
}
