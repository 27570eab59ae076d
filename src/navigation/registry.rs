//! Static registration table for step declarations.

use std::collections::HashMap;

use tracing::debug;

use super::error::{Direction, NavigationError};
use super::route::RouteTemplate;
use super::step::{Step, StepId, StepNode};

/// Step graph metadata, keyed by step type
///
/// Lookups are pure reads. A step type that was never registered behaves
/// exactly like a step without any declarations.
#[derive(Debug, Clone, Default)]
pub struct StepRegistry {
    nodes: HashMap<StepId, StepNode>,
}

impl StepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the declaration of step type `S`, replacing any earlier one
    pub fn register<S: Step>(&mut self) -> &mut Self {
        let id = StepId::of::<S>();
        if self.nodes.insert(id, S::declaration().into_node(id)).is_some() {
            debug!(step = id.name(), "Step declaration replaced");
        }
        self
    }

    pub fn get(&self, step: StepId) -> Option<&StepNode> {
        self.nodes.get(&step)
    }

    pub fn contains(&self, step: StepId) -> bool {
        self.nodes.contains_key(&step)
    }

    /// Find a step by fully-qualified name, or by short name ignoring case
    ///
    /// Short names shared by several steps resolve to the first by full name.
    pub fn find_by_name(&self, name: &str) -> Option<&StepNode> {
        let steps = self.steps();
        steps
            .iter()
            .find(|node| node.id().name() == name)
            .or_else(|| {
                steps
                    .iter()
                    .find(|node| node.id().short_name().eq_ignore_ascii_case(name))
            })
            .copied()
    }

    /// Declared next step of `step`
    pub fn forward_edge(&self, step: StepId) -> Result<StepId, NavigationError> {
        self.edge(step, Direction::Forward)
    }

    /// Declared previous step of `step`
    pub fn backward_edge(&self, step: StepId) -> Result<StepId, NavigationError> {
        self.edge(step, Direction::Backward)
    }

    pub fn edge(&self, step: StepId, direction: Direction) -> Result<StepId, NavigationError> {
        let target = self.get(step).and_then(|node| match direction {
            Direction::Forward => node.next(),
            Direction::Backward => node.previous(),
        });

        target.ok_or(NavigationError::MissingEdge { direction, step })
    }

    /// Declared route templates of `step`, never empty on success
    pub fn route_templates(&self, step: StepId) -> Result<&[RouteTemplate], NavigationError> {
        let routes = self
            .get(step)
            .and_then(StepNode::routes)
            .ok_or(NavigationError::MissingRoute(step))?;

        if routes.iter().all(RouteTemplate::is_empty) {
            return Err(NavigationError::EmptyRoute(step));
        }

        Ok(routes)
    }

    /// Whether `step` declared the conditional capability
    pub fn is_conditional(&self, step: StepId) -> bool {
        self.get(step).is_some_and(StepNode::is_conditional)
    }

    /// All registered steps, sorted by name
    pub fn steps(&self) -> Vec<&StepNode> {
        let mut steps: Vec<&StepNode> = self.nodes.values().collect();
        steps.sort_by_key(|node| node.id().name());
        steps
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check every declaration for problems that would fail a resolution
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for node in self.steps() {
            let id = node.id();

            match self.route_templates(id) {
                Ok(routes) if routes.iter().any(RouteTemplate::is_empty) => {
                    errors.push(format!("Blank route template on {id}"));
                }
                Ok(_) => {}
                Err(e) => errors.push(e.to_string()),
            }

            for template in node.routes().unwrap_or_default() {
                let opens = template.as_str().matches('{').count();
                let closes = template.as_str().matches('}').count();
                if opens != closes || opens != template.placeholder_count() {
                    errors.push(format!(
                        "Malformed route template '{}' on {}",
                        template.as_str(),
                        id
                    ));
                }
            }

            let edges = [
                (Direction::Forward, node.next()),
                (Direction::Backward, node.previous()),
            ];
            for (direction, target) in edges {
                if let Some(target) = target {
                    if !self.contains(target) {
                        errors.push(format!(
                            "{} step {} of {} is not registered",
                            direction, target, id
                        ));
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
