use serde::{Deserialize, Serialize};

use crate::error::ClassificationError;
use crate::inventory::BloodType;

/// Authored impact of a demand driver or risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactTier {
    Low,
    Medium,
    High,
    Critical,
}

impl ImpactTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Classified district risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

/// Bucket used to color a probability bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityBand {
    Low,
    Medium,
    High,
}

/// A real number in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Probability(pub(crate) f32);

impl Probability {
    pub fn new(value: f32) -> Result<Self, ClassificationError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ClassificationError::ProbabilityOutOfRange { value })
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn as_percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl TryFrom<f32> for Probability {
    type Error = ClassificationError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Probability> for f32 {
    fn from(value: Probability) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub description: String,
    pub probability: Probability,
    pub impact: ImpactTier,
    pub affected_blood_types: Vec<BloodType>,
    pub timeframe: String,
}

/// Geospatial demand risk for one district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DistrictInput")]
pub struct DistrictRecord {
    pub(crate) name: String,
    pub(crate) risk_score: u8,
    pub(crate) population: u32,
    pub(crate) hospital_count: u32,
}

impl DistrictRecord {
    pub fn new(
        name: impl Into<String>,
        risk_score: u8,
        population: u32,
        hospital_count: u32,
    ) -> Result<Self, ClassificationError> {
        if risk_score > 100 {
            return Err(ClassificationError::RiskScoreOutOfRange {
                score: i64::from(risk_score),
            });
        }
        if population == 0 {
            return Err(ClassificationError::EmptyPopulation);
        }

        Ok(Self {
            name: name.into(),
            risk_score,
            population,
            hospital_count,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn risk_score(&self) -> u8 {
        self.risk_score
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn hospital_count(&self) -> u32 {
        self.hospital_count
    }
}

/// Unvalidated wire form of [`DistrictRecord`]; the score is kept wide so
/// out-of-range values reach validation instead of failing to parse.
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictInput {
    pub name: String,
    pub risk_score: i64,
    pub population: u32,
    #[serde(default)]
    pub hospital_count: u32,
}

impl TryFrom<DistrictInput> for DistrictRecord {
    type Error = ClassificationError;

    fn try_from(raw: DistrictInput) -> Result<Self, Self::Error> {
        let score = u8::try_from(raw.risk_score)
            .map_err(|_| ClassificationError::RiskScoreOutOfRange {
                score: raw.risk_score,
            })?;
        Self::new(raw.name, score, raw.population, raw.hospital_count)
    }
}
