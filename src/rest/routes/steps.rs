//! Journey step endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::rest::dto::StepResponse;
use crate::rest::error::{ApiError, ErrorResponse};
use crate::rest::state::ApiState;

/// List all steps of the journey
#[utoipa::path(
    get,
    path = "/api/v1/steps",
    tag = "Steps",
    responses(
        (status = 200, description = "List of steps", body = Vec<StepResponse>)
    )
)]
pub async fn list(State(state): State<ApiState>) -> Json<Vec<StepResponse>> {
    let steps = state
        .resolver
        .registry()
        .steps()
        .into_iter()
        .map(StepResponse::from)
        .collect();
    Json(steps)
}

/// Get a single step by name
#[utoipa::path(
    get,
    path = "/api/v1/steps/{name}",
    tag = "Steps",
    params(
        ("name" = String, Path, description = "Short or fully-qualified step name")
    ),
    responses(
        (status = 200, description = "Step details", body = StepResponse),
        (status = 404, description = "Step not found", body = ErrorResponse)
    )
)]
pub async fn get_one(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> Result<Json<StepResponse>, ApiError> {
    let node = state
        .resolver
        .registry()
        .find_by_name(&name)
        .ok_or_else(|| ApiError::NotFound(format!("Step '{}' not found", name)))?;

    Ok(Json(StepResponse::from(node)))
}
