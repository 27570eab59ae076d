//! Errors raised while resolving journey navigation.

use std::fmt;

use thiserror::Error;

use super::step::StepId;

/// Direction of travel through the step graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("next"),
            Direction::Backward => f.write_str("previous"),
        }
    }
}

/// Failure reported by a conditional step or the instance provider
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("{service} request failed: {message}")]
    Upstream { service: String, message: String },

    #[error("no conditional instance registered for {0}")]
    InstanceUnavailable(StepId),
}

/// Resolution failures. All of them are configuration or collaborator
/// errors; none is caused by user input.
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Missing {direction} step declaration on {step}")]
    MissingEdge { direction: Direction, step: StepId },

    #[error("Missing route mapping on {0}")]
    MissingRoute(StepId),

    #[error("Missing route mapping value on {0}")]
    EmptyRoute(StepId),

    #[error("No mapping found that matches the number of path variables provided")]
    NoMatchingRoute,

    #[error("Failed to decide whether {step} should render: {source}")]
    NavigationFailure {
        step: StepId,
        #[source]
        source: ServiceError,
    },

    #[error("Conditional steps skip in a cycle through {0}")]
    SkipCycle(StepId),
}

impl NavigationError {
    /// Step the error refers to, if any
    pub fn step(&self) -> Option<StepId> {
        match self {
            NavigationError::MissingEdge { step, .. }
            | NavigationError::NavigationFailure { step, .. } => Some(*step),
            NavigationError::MissingRoute(step)
            | NavigationError::EmptyRoute(step)
            | NavigationError::SkipCycle(step) => Some(*step),
            NavigationError::NoMatchingRoute => None,
        }
    }
}
