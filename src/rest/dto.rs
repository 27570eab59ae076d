//! Data Transfer Objects for the REST API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::navigation::{Destination, StepNode};

// =============================================================================
// Step DTOs
// =============================================================================

/// Response for a single journey step
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StepResponse {
    /// Fully-qualified step type name
    pub name: String,
    pub short_name: String,
    /// Route templates in declaration order
    pub routes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    pub conditional: bool,
}

impl From<&StepNode> for StepResponse {
    fn from(node: &StepNode) -> Self {
        Self {
            name: node.id().name().to_string(),
            short_name: node.id().short_name().to_string(),
            routes: node
                .routes()
                .unwrap_or_default()
                .iter()
                .map(|template| template.as_str().to_string())
                .collect(),
            next: node.next().map(|id| id.short_name().to_string()),
            previous: node.previous().map(|id| id.short_name().to_string()),
            conditional: node.is_conditional(),
        }
    }
}

// =============================================================================
// Navigation DTOs
// =============================================================================

/// Request to resolve the step before or after `step`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavigationRequest {
    /// Step name (short or fully-qualified)
    pub step: String,
    /// Path parameter values in route template order
    #[serde(default)]
    pub path_parameters: Vec<String>,
}

/// Resolved destination
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    /// Destination as handed to page handlers (`redirect:` prefixed for redirects)
    pub destination: String,
    /// Path with parameters substituted
    pub path: String,
    /// Whether the destination is an HTTP redirect
    pub redirect: bool,
}

impl From<Destination> for NavigationResponse {
    fn from(destination: Destination) -> Self {
        Self {
            destination: destination.to_string(),
            path: destination.path().to_string(),
            redirect: destination.is_redirect(),
        }
    }
}

// =============================================================================
// Health DTOs
// =============================================================================

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub step_count: usize,
    /// Penalty reference prefixes accepted by the configured feature flags
    pub reference_prefixes: Vec<String>,
}
