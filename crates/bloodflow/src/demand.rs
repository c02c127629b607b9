//! Demand-side sample data: the 7-day forecast, external demand drivers, the
//! prediction data sources, and scheduled blood drives.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::emphasis::{emphasis_for_severity, Emphasis};
use crate::inventory::BloodType;
use crate::risk::{ImpactTier, Probability};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub day: String,
    pub predicted: u32,
    #[serde(default)]
    pub actual: Option<u32>,
}

/// Mean of `1 - |predicted - actual| / actual` over days with a recorded, non-zero
/// actual. `None` when no day qualifies.
pub fn forecast_accuracy(points: &[ForecastPoint]) -> Option<f32> {
    let scores: Vec<f32> = points
        .iter()
        .filter_map(|point| match point.actual {
            Some(actual) if actual > 0 => {
                let error = (point.predicted as f32 - actual as f32).abs() / actual as f32;
                Some((1.0 - error).clamp(0.0, 1.0))
            }
            _ => None,
        })
        .collect();

    if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum::<f32>() / scores.len() as f32)
    }
}

/// External signal expected to move demand for specific blood types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandDriver {
    pub factor: String,
    pub description: String,
    pub impact: ImpactTier,
    pub confidence: Probability,
    pub blood_types: Vec<BloodType>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemandDriverView {
    pub factor: String,
    pub description: String,
    pub impact: ImpactTier,
    pub impact_label: &'static str,
    pub emphasis: Emphasis,
    pub confidence_pct: u8,
    pub blood_types: Vec<BloodType>,
}

impl DemandDriver {
    pub fn to_view(&self) -> DemandDriverView {
        DemandDriverView {
            factor: self.factor.clone(),
            description: self.description.clone(),
            impact: self.impact,
            impact_label: self.impact.label(),
            emphasis: emphasis_for_severity(self.impact),
            confidence_pct: self.confidence.as_percent(),
            blood_types: self.blood_types.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceMetric {
    pub source: String,
    pub accuracy: Probability,
    pub data_points: u64,
    pub update_frequency: String,
    pub impact: ImpactTier,
}

#[derive(Debug, Clone, Serialize)]
pub struct DataSourceView {
    pub source: String,
    pub accuracy_pct: u8,
    pub data_points: u64,
    pub update_frequency: String,
    pub impact: ImpactTier,
    pub impact_label: &'static str,
    pub emphasis: Emphasis,
}

impl DataSourceMetric {
    pub fn to_view(&self) -> DataSourceView {
        DataSourceView {
            source: self.source.clone(),
            accuracy_pct: self.accuracy.as_percent(),
            data_points: self.data_points,
            update_frequency: self.update_frequency.clone(),
            impact: self.impact,
            impact_label: self.impact.label(),
            emphasis: emphasis_for_severity(self.impact),
        }
    }
}

pub fn total_data_points(sources: &[DataSourceMetric]) -> u64 {
    sources.iter().map(|source| source.data_points).sum()
}

/// Per-signal demand indices for one day, alongside the blended estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiSourcePrediction {
    pub date: NaiveDate,
    pub baseline: u32,
    pub climate: u32,
    pub events: u32,
    pub demographics: u32,
    pub emergency: u32,
    pub combined: u32,
}

impl MultiSourcePrediction {
    /// Signal with the largest index that day, as `(name, value)`.
    pub fn dominant_signal(&self) -> (&'static str, u32) {
        [
            ("climate", self.climate),
            ("events", self.events),
            ("demographics", self.demographics),
            ("emergency", self.emergency),
        ]
        .into_iter()
        .fold(("baseline", self.baseline), |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodDrive {
    pub id: u32,
    pub location: String,
    pub scheduled_for: String,
    pub expected_donors: u32,
    pub target_types: Vec<BloodType>,
}

pub fn expected_drive_donors(drives: &[BloodDrive]) -> u32 {
    drives.iter().map(|drive| drive.expected_donors).sum()
}
