//! Display emphasis shared by every severity-like classification.
//!
//! Inventory status, risk impact, alert severity, district risk tier, and
//! donation urgency all collapse onto the same three badge variants. Each
//! source enum reports a [`SeverityRank`]; [`emphasis_for_severity`] is the
//! only place the rank is turned into an [`Emphasis`].

use serde::Serialize;

use crate::alerts::AlertSeverity;
use crate::donor::RequestUrgency;
use crate::inventory::InventoryStatus;
use crate::risk::{ImpactTier, RiskTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Outline,
    Secondary,
    Destructive,
}

impl Emphasis {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Destructive => "destructive",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
        }
    }
}

/// Normalized severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SeverityRank {
    Routine,
    Elevated,
    Highest,
}

pub trait Severity: Copy {
    fn rank(self) -> SeverityRank;
}

pub fn emphasis_for_severity<S: Severity>(severity: S) -> Emphasis {
    match severity.rank() {
        SeverityRank::Highest => Emphasis::Destructive,
        SeverityRank::Elevated => Emphasis::Secondary,
        SeverityRank::Routine => Emphasis::Outline,
    }
}

impl Severity for InventoryStatus {
    fn rank(self) -> SeverityRank {
        match self {
            Self::Critical => SeverityRank::Highest,
            Self::Low => SeverityRank::Elevated,
            Self::Good => SeverityRank::Routine,
        }
    }
}

impl Severity for ImpactTier {
    fn rank(self) -> SeverityRank {
        match self {
            Self::Critical => SeverityRank::Highest,
            Self::High => SeverityRank::Elevated,
            Self::Medium | Self::Low => SeverityRank::Routine,
        }
    }
}

impl Severity for AlertSeverity {
    fn rank(self) -> SeverityRank {
        match self {
            Self::Critical => SeverityRank::Highest,
            Self::Warning => SeverityRank::Elevated,
            Self::Info => SeverityRank::Routine,
        }
    }
}

impl Severity for RiskTier {
    fn rank(self) -> SeverityRank {
        match self {
            Self::High => SeverityRank::Highest,
            Self::Medium => SeverityRank::Elevated,
            Self::Low => SeverityRank::Routine,
        }
    }
}

impl Severity for RequestUrgency {
    fn rank(self) -> SeverityRank {
        match self {
            Self::Critical => SeverityRank::Highest,
            Self::High => SeverityRank::Elevated,
            Self::Medium => SeverityRank::Routine,
        }
    }
}
