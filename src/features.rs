//! Feature flags controlling which penalty reference types are accepted.

use crate::config::FeaturesConfig;

/// Kinds of penalty reference a user can pay against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PenaltyReferenceType {
    /// Late filing penalty (references start with "A")
    LateFiling,
    /// Sanctions penalty (references start with "P")
    Sanctions,
    /// Sanctions for the register of overseas entities (references start with "U")
    SanctionsRoe,
}

impl PenaltyReferenceType {
    pub fn all() -> &'static [PenaltyReferenceType] {
        &[
            PenaltyReferenceType::LateFiling,
            PenaltyReferenceType::Sanctions,
            PenaltyReferenceType::SanctionsRoe,
        ]
    }

    /// Leading character of references of this type
    pub fn starts_with(self) -> &'static str {
        match self {
            PenaltyReferenceType::LateFiling => "A",
            PenaltyReferenceType::Sanctions => "P",
            PenaltyReferenceType::SanctionsRoe => "U",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PenaltyReferenceType::LateFiling => "Late filing penalty",
            PenaltyReferenceType::Sanctions => "Sanctions penalty",
            PenaltyReferenceType::SanctionsRoe => "Overseas entity sanctions penalty",
        }
    }
}

/// Snapshot of the enabled feature flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    enabled: Vec<PenaltyReferenceType>,
}

impl FeatureFlags {
    pub fn new(enabled: impl IntoIterator<Item = PenaltyReferenceType>) -> Self {
        let enabled: Vec<PenaltyReferenceType> = enabled.into_iter().collect();
        // keep declaration order and drop duplicates
        let enabled = PenaltyReferenceType::all()
            .iter()
            .copied()
            .filter(|kind| enabled.contains(kind))
            .collect();
        Self { enabled }
    }

    pub fn from_config(config: &FeaturesConfig) -> Self {
        let mut enabled = Vec::new();
        if config.late_filing_penalties {
            enabled.push(PenaltyReferenceType::LateFiling);
        }
        if config.sanctions {
            enabled.push(PenaltyReferenceType::Sanctions);
        }
        if config.sanctions_roe {
            enabled.push(PenaltyReferenceType::SanctionsRoe);
        }
        Self::new(enabled)
    }

    pub fn enabled_reference_types(&self) -> &[PenaltyReferenceType] {
        &self.enabled
    }

    pub fn is_enabled(&self, kind: PenaltyReferenceType) -> bool {
        self.enabled.contains(&kind)
    }
}
