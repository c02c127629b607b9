use super::domain::{Probability, ProbabilityBand, RiskTier};
use crate::error::ClassificationError;

pub const HIGH_RISK_ABOVE: i64 = 80;
pub const MEDIUM_RISK_ABOVE: i64 = 60;

const HIGH_PROBABILITY_ABOVE: f32 = 0.8;
const MEDIUM_PROBABILITY_ABOVE: f32 = 0.6;

/// Bucket a `[0, 100]` risk score. Bands are `(80, 100]`, `(60, 80]`, `[0, 60]`.
pub fn classify_risk_tier(score: i64) -> Result<RiskTier, ClassificationError> {
    if !(0..=100).contains(&score) {
        return Err(ClassificationError::RiskScoreOutOfRange { score });
    }

    Ok(tier_for_score(score))
}

/// Callers must have bounded `score` to `[0, 100]` already.
pub(crate) fn tier_for_score(score: i64) -> RiskTier {
    if score > HIGH_RISK_ABOVE {
        RiskTier::High
    } else if score > MEDIUM_RISK_ABOVE {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

pub fn classify_probability(value: f32) -> Result<ProbabilityBand, ClassificationError> {
    Probability::new(value).map(Probability::band)
}

impl Probability {
    pub fn band(self) -> ProbabilityBand {
        if self.0 > HIGH_PROBABILITY_ABOVE {
            ProbabilityBand::High
        } else if self.0 > MEDIUM_PROBABILITY_ABOVE {
            ProbabilityBand::Medium
        } else {
            ProbabilityBand::Low
        }
    }
}
