use serde::Serialize;

use super::domain::{DistrictRecord, ImpactTier, ProbabilityBand, RiskFactor, RiskTier};
use super::tiers::tier_for_score;
use crate::emphasis::{emphasis_for_severity, Emphasis};
use crate::inventory::BloodType;

/// Highest risk first. The sort is stable, so equal scores keep input order.
pub fn rank_districts_by_risk(records: &[DistrictRecord]) -> Vec<&DistrictRecord> {
    let mut ranked: Vec<&DistrictRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    ranked
}

impl DistrictRecord {
    pub fn tier(&self) -> RiskTier {
        tier_for_score(i64::from(self.risk_score))
    }

    pub fn to_view(&self) -> DistrictRiskView {
        let tier = self.tier();
        DistrictRiskView {
            name: self.name.clone(),
            risk_score: self.risk_score,
            tier,
            tier_label: tier.label(),
            emphasis: emphasis_for_severity(tier),
            population: self.population,
            hospital_count: self.hospital_count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DistrictRiskView {
    pub name: String,
    pub risk_score: u8,
    pub tier: RiskTier,
    pub tier_label: &'static str,
    pub emphasis: Emphasis,
    pub population: u32,
    pub hospital_count: u32,
}

pub fn ranked_district_views(records: &[DistrictRecord]) -> Vec<DistrictRiskView> {
    rank_districts_by_risk(records)
        .into_iter()
        .map(DistrictRecord::to_view)
        .collect()
}

/// Residents living in districts classified as high risk.
pub fn population_at_risk(records: &[DistrictRecord]) -> u64 {
    records
        .iter()
        .filter(|district| district.tier() == RiskTier::High)
        .map(|district| u64::from(district.population))
        .sum()
}

pub fn high_impact_count(factors: &[RiskFactor]) -> usize {
    factors
        .iter()
        .filter(|factor| factor.impact >= ImpactTier::High)
        .count()
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskFactorView {
    pub name: String,
    pub description: String,
    pub impact: ImpactTier,
    pub impact_label: &'static str,
    pub emphasis: Emphasis,
    pub probability_pct: u8,
    pub probability_band: ProbabilityBand,
    pub affected_blood_types: Vec<BloodType>,
    pub timeframe: String,
}

impl RiskFactor {
    pub fn to_view(&self) -> RiskFactorView {
        RiskFactorView {
            name: self.name.clone(),
            description: self.description.clone(),
            impact: self.impact,
            impact_label: self.impact.label(),
            emphasis: emphasis_for_severity(self.impact),
            probability_pct: self.probability.as_percent(),
            probability_band: self.probability.band(),
            affected_blood_types: self.affected_blood_types.clone(),
            timeframe: self.timeframe.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district(name: &str, score: u8) -> DistrictRecord {
        DistrictRecord::new(name, score, 100_000, 4).expect("valid district")
    }

    #[test]
    fn ranks_highest_risk_first() {
        let districts = vec![
            district("Downtown", 85),
            district("Midtown", 72),
            district("Uptown", 91),
            district("Suburbs", 58),
        ];

        let names: Vec<&str> = rank_districts_by_risk(&districts)
            .into_iter()
            .map(DistrictRecord::name)
            .collect();
        assert_eq!(names, ["Uptown", "Downtown", "Midtown", "Suburbs"]);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let districts = vec![
            district("North", 70),
            district("East", 90),
            district("South", 70),
            district("West", 70),
        ];

        let names: Vec<&str> = rank_districts_by_risk(&districts)
            .into_iter()
            .map(DistrictRecord::name)
            .collect();
        assert_eq!(names, ["East", "North", "South", "West"]);
    }

    #[test]
    fn empty_input_ranks_to_empty() {
        assert!(rank_districts_by_risk(&[]).is_empty());
        assert_eq!(population_at_risk(&[]), 0);
    }

    #[test]
    fn views_carry_tier_and_badge() {
        let views = ranked_district_views(&[district("Suburbs", 58), district("Uptown", 91)]);
        assert_eq!(views[0].name, "Uptown");
        assert_eq!(views[0].tier_label, "High Risk");
        assert_eq!(views[0].emphasis, Emphasis::Destructive);
        assert_eq!(views[1].tier, RiskTier::Low);
        assert_eq!(views[1].emphasis, Emphasis::Outline);
    }

    #[test]
    fn population_at_risk_counts_high_tier_only() {
        let districts = vec![
            DistrictRecord::new("Downtown", 85, 250_000, 8).unwrap(),
            DistrictRecord::new("Midtown", 72, 180_000, 5).unwrap(),
            DistrictRecord::new("Uptown", 91, 320_000, 12).unwrap(),
        ];
        assert_eq!(population_at_risk(&districts), 570_000);
    }
}
