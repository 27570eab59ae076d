//! Step identity and static step declarations.
//!
//! A step is a Rust type. Its identity is the type itself ([`StepId`]) and its
//! place in the journey graph is declared once through [`Step::declaration`].

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::route::RouteTemplate;

/// Identity token for a step type
#[derive(Clone, Copy)]
pub struct StepId {
    type_id: TypeId,
    name: &'static str,
}

impl StepId {
    /// Identity of the step type `S`
    pub fn of<S: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<S>(),
            name: type_name::<S>(),
        }
    }

    /// Fully-qualified type name (e.g. `penalty_journey::journey::StartStep`)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name (e.g. `StartStep`)
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for StepId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for StepId {}

impl Hash for StepId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StepId({})", self.name)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A page in the journey with a static place in the step graph
pub trait Step: 'static {
    /// Edges and route templates for this step type
    fn declaration() -> StepDeclaration;
}

/// Builder for the static declaration of a step
///
/// Route information is tri-state: never declared (`routes` is `None`),
/// declared without any template, or declared with one or more templates.
#[derive(Debug, Clone, Default)]
pub struct StepDeclaration {
    routes: Option<Vec<String>>,
    next: Option<StepId>,
    previous: Option<StepId>,
    conditional: bool,
}

impl StepDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single route template
    pub fn route(mut self, template: impl Into<String>) -> Self {
        self.routes
            .get_or_insert_with(Vec::new)
            .push(template.into());
        self
    }

    /// Declare the full ordered list of route templates (may be empty)
    pub fn routes<I, T>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.routes = Some(templates.into_iter().map(Into::into).collect());
        self
    }

    /// Step shown after this one
    pub fn next<S: Step>(mut self) -> Self {
        self.next = Some(StepId::of::<S>());
        self
    }

    /// Step shown before this one
    pub fn previous<S: Step>(mut self) -> Self {
        self.previous = Some(StepId::of::<S>());
        self
    }

    /// Mark the step as able to skip itself at request time
    pub fn conditional(mut self) -> Self {
        self.conditional = true;
        self
    }

    pub(crate) fn into_node(self, id: StepId) -> StepNode {
        StepNode {
            id,
            routes: self
                .routes
                .map(|templates| templates.into_iter().map(RouteTemplate::parse).collect()),
            next: self.next,
            previous: self.previous,
            conditional: self.conditional,
        }
    }
}

/// Immutable registration record for one step type
#[derive(Debug, Clone)]
pub struct StepNode {
    id: StepId,
    routes: Option<Vec<RouteTemplate>>,
    next: Option<StepId>,
    previous: Option<StepId>,
    conditional: bool,
}

impl StepNode {
    pub fn id(&self) -> StepId {
        self.id
    }

    /// Declared route templates, `None` when no route information exists
    pub fn routes(&self) -> Option<&[RouteTemplate]> {
        self.routes.as_deref()
    }

    pub fn next(&self) -> Option<StepId> {
        self.next
    }

    pub fn previous(&self) -> Option<StepId> {
        self.previous
    }

    pub fn is_conditional(&self) -> bool {
        self.conditional
    }
}
