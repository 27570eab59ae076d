//! OpenAPI specification builder using utoipa.

use utoipa::OpenApi;

use crate::rest::dto::{HealthResponse, NavigationRequest, NavigationResponse, StepResponse};
use crate::rest::error::ErrorResponse;

/// OpenAPI documentation for the penalty journey REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Penalty Journey API",
        description = "Step navigation for the late-filing penalty payment journey.",
        license(name = "MIT")
    ),
    paths(
        crate::rest::routes::health::health,
        crate::rest::routes::steps::list,
        crate::rest::routes::steps::get_one,
        crate::rest::routes::navigation::next,
        crate::rest::routes::navigation::previous,
    ),
    components(
        schemas(
            HealthResponse,
            StepResponse,
            NavigationRequest,
            NavigationResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Steps", description = "Journey step declarations"),
        (name = "Navigation", description = "Next and previous step resolution"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI specification as a JSON string
    pub fn json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::openapi())
    }

    /// Generate the OpenAPI specification as a YAML string
    pub fn yaml() -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&Self::openapi())
    }
}
