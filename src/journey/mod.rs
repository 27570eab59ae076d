//! The late-filing penalty payment journey.
//!
//! `Start → PenaltyRefStarts → EnterDetails → ViewPenalties → PaymentConfirmation`,
//! where `PenaltyRefStarts` is skipped unless several penalty reference types
//! are enabled.

pub mod steps;

use std::sync::Arc;

use tracing::info;

use crate::features::FeatureFlags;
use crate::navigation::{ConditionalInstances, NavigationResolver, StepRegistry};

pub use steps::{EnterDetails, PaymentConfirmation, PenaltyRefStarts, Start, ViewPenalties};

/// Step declarations of the journey
pub fn build_registry() -> StepRegistry {
    let mut registry = StepRegistry::new();
    registry
        .register::<Start>()
        .register::<PenaltyRefStarts>()
        .register::<EnterDetails>()
        .register::<ViewPenalties>()
        .register::<PaymentConfirmation>();
    registry
}

/// Conditional step instances of the journey
pub fn build_instances(flags: Arc<FeatureFlags>) -> ConditionalInstances {
    let mut instances = ConditionalInstances::new();
    instances.register(move || PenaltyRefStarts::new(Arc::clone(&flags)));
    instances
}

pub fn build_resolver(flags: FeatureFlags) -> NavigationResolver {
    let flags = Arc::new(flags);
    info!(
        enabled = ?flags.enabled_reference_types(),
        "Building journey navigation"
    );

    NavigationResolver::new(
        Arc::new(build_registry()),
        Arc::new(build_instances(flags)),
    )
}
