//! Demand risk: authored risk factors and geospatial district scores.

pub mod domain;
pub mod ranking;
pub mod tiers;

pub use domain::{
    DistrictInput, DistrictRecord, ImpactTier, Probability, ProbabilityBand, RiskFactor, RiskTier,
};
pub use ranking::{
    high_impact_count, population_at_risk, rank_districts_by_risk, ranked_district_views,
    DistrictRiskView, RiskFactorView,
};
pub use tiers::{classify_probability, classify_risk_tier};
