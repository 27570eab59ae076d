//! Conditional steps and the provider that hands out live instances of them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::error::ServiceError;
use super::step::{Step, StepId};

/// A step that can decide at request time not to be shown
///
/// Implementations may consult any collaborator (feature flags, session
/// state, earlier API responses). Failures are propagated to the caller.
pub trait ConditionalStep: Send + Sync {
    fn will_render(&self, path_parameters: &[String]) -> Result<bool, ServiceError>;
}

/// Constructs or fetches a live instance of a conditional step type
pub trait InstanceProvider: Send + Sync {
    fn conditional(&self, step: StepId) -> Result<Arc<dyn ConditionalStep>, ServiceError>;
}

type Factory = Box<dyn Fn() -> Arc<dyn ConditionalStep> + Send + Sync>;

/// Factory-backed [`InstanceProvider`]; each lookup builds a fresh instance
#[derive(Default)]
pub struct ConditionalInstances {
    factories: HashMap<StepId, Factory>,
}

impl ConditionalInstances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory for step type `S`, which is its own conditional instance
    pub fn register<S, F>(&mut self, factory: F) -> &mut Self
    where
        S: Step + ConditionalStep,
        F: Fn() -> S + Send + Sync + 'static,
    {
        self.factories.insert(
            StepId::of::<S>(),
            Box::new(move || Arc::new(factory()) as Arc<dyn ConditionalStep>),
        );
        self
    }

    pub fn provides(&self, step: StepId) -> bool {
        self.factories.contains_key(&step)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl InstanceProvider for ConditionalInstances {
    fn conditional(&self, step: StepId) -> Result<Arc<dyn ConditionalStep>, ServiceError> {
        self.factories
            .get(&step)
            .map(|factory| factory())
            .ok_or(ServiceError::InstanceUnavailable(step))
    }
}

impl fmt::Debug for ConditionalInstances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionalInstances")
            .field("steps", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
