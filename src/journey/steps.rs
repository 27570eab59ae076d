//! Pages of the late-filing penalty payment journey.

use std::sync::Arc;

use tracing::debug;

use crate::features::FeatureFlags;
use crate::navigation::{ConditionalStep, ServiceError, Step, StepDeclaration};

pub const START_PATH: &str = "/late-filing-penalty";
pub const REF_STARTS_PATH: &str = "/late-filing-penalty/ref-starts";
pub const ENTER_DETAILS_PATH: &str = "/late-filing-penalty/enter-details";
pub const ENTER_DETAILS_FOR_TYPE_PATH: &str =
    "/late-filing-penalty/ref-starts/{penaltyReferenceStartsWith}/enter-details";
pub const VIEW_PENALTIES_PATH: &str =
    "/late-filing-penalty/company/{companyNumber}/penalty/{penaltyRef}/view-penalties";
pub const PAYMENT_COMPLETE_PATH: &str =
    "/late-filing-penalty/company/{companyNumber}/penalty/{penaltyRef}/payment/complete";

/// Landing page of the journey
pub struct Start;

impl Step for Start {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route(START_PATH)
            .next::<PenaltyRefStarts>()
    }
}

/// Choice of penalty reference type
///
/// Only shown when more than one reference type is enabled; with a single
/// type there is nothing to choose.
pub struct PenaltyRefStarts {
    flags: Arc<FeatureFlags>,
}

impl PenaltyRefStarts {
    pub fn new(flags: Arc<FeatureFlags>) -> Self {
        Self { flags }
    }
}

impl Step for PenaltyRefStarts {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route(REF_STARTS_PATH)
            .next::<EnterDetails>()
            .previous::<Start>()
            .conditional()
    }
}

impl ConditionalStep for PenaltyRefStarts {
    fn will_render(&self, _path_parameters: &[String]) -> Result<bool, ServiceError> {
        let enabled = self.flags.enabled_reference_types().len();
        debug!(enabled, "Checking penalty reference types");
        Ok(enabled > 1)
    }
}

/// Company number and penalty reference entry
pub struct EnterDetails;

impl Step for EnterDetails {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .routes([ENTER_DETAILS_PATH, ENTER_DETAILS_FOR_TYPE_PATH])
            .next::<ViewPenalties>()
            .previous::<PenaltyRefStarts>()
    }
}

/// Summary of the outstanding penalty
pub struct ViewPenalties;

impl Step for ViewPenalties {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route(VIEW_PENALTIES_PATH)
            .next::<PaymentConfirmation>()
            .previous::<EnterDetails>()
    }
}

/// Confirmation shown after the payment service returns
pub struct PaymentConfirmation;

impl Step for PaymentConfirmation {
    fn declaration() -> StepDeclaration {
        StepDeclaration::new()
            .route(PAYMENT_COMPLETE_PATH)
            .previous::<ViewPenalties>()
    }
}
