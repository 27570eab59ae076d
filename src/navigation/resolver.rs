//! Next/previous destination resolution with conditional skipping.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::conditional::InstanceProvider;
use super::error::{Direction, NavigationError};
use super::registry::StepRegistry;
use super::route::select_template;
use super::step::{Step, StepId};

/// Prefix marking a destination as an HTTP redirect
pub const REDIRECT_PREFIX: &str = "redirect:";

/// Where a resolution lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Issue an HTTP redirect to the path
    Redirect(String),
    /// Bind the path into the current page (e.g. a back link)
    Link(String),
}

impl Destination {
    pub fn path(&self) -> &str {
        match self {
            Destination::Redirect(path) | Destination::Link(path) => path,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Destination::Redirect(_))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Redirect(path) => write!(f, "{}{}", REDIRECT_PREFIX, path),
            Destination::Link(path) => f.write_str(path),
        }
    }
}

/// Computes the next or previous page of the journey for a step
///
/// Stateless across calls: every resolution walks the immutable registry and
/// asks the instance provider for a fresh conditional instance per visited
/// conditional step.
#[derive(Clone)]
pub struct NavigationResolver {
    registry: Arc<StepRegistry>,
    instances: Arc<dyn InstanceProvider>,
}

impl NavigationResolver {
    pub fn new(registry: Arc<StepRegistry>, instances: Arc<dyn InstanceProvider>) -> Self {
        Self {
            registry,
            instances,
        }
    }

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Redirect destination of the step after `S`
    pub fn next_step<S: Step>(
        &self,
        path_parameters: &[impl AsRef<str>],
    ) -> Result<String, NavigationError> {
        self.next_step_for(StepId::of::<S>(), path_parameters)
    }

    /// Back-link path of the step before `S`
    pub fn previous_step<S: Step>(
        &self,
        path_parameters: &[impl AsRef<str>],
    ) -> Result<String, NavigationError> {
        self.previous_step_for(StepId::of::<S>(), path_parameters)
    }

    pub fn next_step_for(
        &self,
        step: StepId,
        path_parameters: &[impl AsRef<str>],
    ) -> Result<String, NavigationError> {
        self.resolve(step, Direction::Forward, path_parameters)
            .map(|destination| destination.to_string())
    }

    pub fn previous_step_for(
        &self,
        step: StepId,
        path_parameters: &[impl AsRef<str>],
    ) -> Result<String, NavigationError> {
        self.resolve(step, Direction::Backward, path_parameters)
            .map(|destination| destination.to_string())
    }

    /// Walk from `step` in `direction`, skipping conditional steps that
    /// decline to render, and fill the landing step's route template
    pub fn resolve(
        &self,
        step: StepId,
        direction: Direction,
        path_parameters: &[impl AsRef<str>],
    ) -> Result<Destination, NavigationError> {
        let parameters: Vec<String> = path_parameters
            .iter()
            .map(|value| value.as_ref().to_string())
            .collect();

        let target = self.landing_step(step, direction, &parameters)?;
        let templates = self.registry.route_templates(target)?;
        let path = select_template(templates, parameters.len())?.expand(&parameters)?;

        trace!(
            from = step.short_name(),
            to = target.short_name(),
            %direction,
            path = %path,
            "Resolved destination"
        );

        Ok(match direction {
            Direction::Forward => Destination::Redirect(path),
            Direction::Backward => Destination::Link(path),
        })
    }

    fn landing_step(
        &self,
        step: StepId,
        direction: Direction,
        parameters: &[String],
    ) -> Result<StepId, NavigationError> {
        let mut target = self.registry.edge(step, direction)?;
        let mut skipped = HashSet::new();

        loop {
            self.registry.route_templates(target)?;

            if !self.registry.is_conditional(target) {
                return Ok(target);
            }

            let instance = self
                .instances
                .conditional(target)
                .map_err(|source| NavigationError::NavigationFailure {
                    step: target,
                    source,
                })?;
            let renders = instance.will_render(parameters).map_err(|source| {
                NavigationError::NavigationFailure {
                    step: target,
                    source,
                }
            })?;

            if renders {
                return Ok(target);
            }

            debug!(
                step = target.short_name(),
                %direction,
                "Skipping conditional step"
            );

            if !skipped.insert(target) {
                return Err(NavigationError::SkipCycle(target));
            }
            target = self.registry.edge(target, direction)?;
        }
    }
}

impl fmt::Debug for NavigationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationResolver")
            .field("steps", &self.registry.len())
            .finish_non_exhaustive()
    }
}
