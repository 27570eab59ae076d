//! Wizard navigation for multi-step journeys.
//!
//! Each page of a journey is a step type implementing [`Step`]. Its
//! declaration names the step before and after it and the route templates it
//! is served on. [`NavigationResolver`] walks those edges, asks conditional
//! steps whether they want to be shown, and fills the landing step's route
//! template with the caller's path parameters.
//!
//! ```rust
//! use std::sync::Arc;
//! use penalty_journey::navigation::{
//!     ConditionalInstances, NavigationResolver, Step, StepDeclaration, StepRegistry,
//! };
//!
//! struct Start;
//! struct Details;
//!
//! impl Step for Start {
//!     fn declaration() -> StepDeclaration {
//!         StepDeclaration::new().route("/start").next::<Details>()
//!     }
//! }
//!
//! impl Step for Details {
//!     fn declaration() -> StepDeclaration {
//!         StepDeclaration::new()
//!             .route("/company/{companyNumber}/details")
//!             .previous::<Start>()
//!     }
//! }
//!
//! let mut registry = StepRegistry::new();
//! registry.register::<Start>().register::<Details>();
//! let resolver = NavigationResolver::new(
//!     Arc::new(registry),
//!     Arc::new(ConditionalInstances::new()),
//! );
//!
//! let next = resolver.next_step::<Start>(&["12345678"]).unwrap();
//! assert_eq!(next, "redirect:/company/12345678/details");
//! ```

pub mod conditional;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod route;
pub mod step;

pub use conditional::{ConditionalInstances, ConditionalStep, InstanceProvider};
pub use error::{Direction, NavigationError, ServiceError};
pub use registry::StepRegistry;
pub use resolver::{Destination, NavigationResolver, REDIRECT_PREFIX};
pub use route::{select_template, RouteTemplate};
pub use step::{Step, StepDeclaration, StepId, StepNode};
