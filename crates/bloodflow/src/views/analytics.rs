use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{parse_tab, ViewError};
use crate::demand::{total_data_points, DataSourceMetric, DataSourceView, MultiSourcePrediction};
use crate::fixtures;
use crate::risk::{
    high_impact_count, population_at_risk, ranked_district_views, DistrictRecord,
    DistrictRiskView, RiskFactor, RiskFactorView,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalyticsTab {
    #[default]
    DataSources,
    Predictions,
    RiskAnalysis,
    Geospatial,
}

impl AnalyticsTab {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::DataSources,
            Self::Predictions,
            Self::RiskAnalysis,
            Self::Geospatial,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::DataSources => "data-sources",
            Self::Predictions => "predictions",
            Self::RiskAnalysis => "risk-analysis",
            Self::Geospatial => "geospatial",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DataSources => "Data Sources",
            Self::Predictions => "Multi-Source Predictions",
            Self::RiskAnalysis => "Risk Analysis",
            Self::Geospatial => "Geospatial Intelligence",
        }
    }
}

impl FromStr for AnalyticsTab {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_tab(value, &Self::ordered(), Self::slug)
    }
}

impl fmt::Display for AnalyticsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone)]
pub struct AnalyticsData {
    pub sources: Vec<DataSourceMetric>,
    pub predictions: Vec<MultiSourcePrediction>,
    pub risk_factors: Vec<RiskFactor>,
    pub districts: Vec<DistrictRecord>,
}

impl AnalyticsData {
    pub fn sample() -> Self {
        Self {
            sources: fixtures::data_sources(),
            predictions: fixtures::multi_source_predictions(),
            risk_factors: fixtures::risk_factors(),
            districts: fixtures::districts(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionRow {
    #[serde(flatten)]
    pub prediction: MultiSourcePrediction,
    pub dominant_signal: &'static str,
}

impl From<&MultiSourcePrediction> for PredictionRow {
    fn from(prediction: &MultiSourcePrediction) -> Self {
        Self {
            prediction: prediction.clone(),
            dominant_signal: prediction.dominant_signal().0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsView {
    pub tab: AnalyticsTab,
    pub tab_label: &'static str,
    pub total_data_points: u64,
    pub high_impact_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_sources: Option<Vec<DataSourceView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<PredictionRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_factors: Option<Vec<RiskFactorView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub districts: Option<Vec<DistrictRiskView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population_at_risk: Option<u64>,
}

pub fn analytics_view(data: &AnalyticsData, tab: AnalyticsTab) -> AnalyticsView {
    let mut view = AnalyticsView {
        tab,
        tab_label: tab.label(),
        total_data_points: total_data_points(&data.sources),
        high_impact_count: high_impact_count(&data.risk_factors),
        data_sources: None,
        predictions: None,
        risk_factors: None,
        districts: None,
        population_at_risk: None,
    };

    match tab {
        AnalyticsTab::DataSources => {
            view.data_sources = Some(data.sources.iter().map(DataSourceMetric::to_view).collect());
        }
        AnalyticsTab::Predictions => {
            view.predictions = Some(data.predictions.iter().map(PredictionRow::from).collect());
        }
        AnalyticsTab::RiskAnalysis => {
            view.risk_factors = Some(data.risk_factors.iter().map(RiskFactor::to_view).collect());
        }
        AnalyticsTab::Geospatial => {
            view.districts = Some(ranked_district_views(&data.districts));
            view.population_at_risk = Some(population_at_risk(&data.districts));
        }
    }

    view
}
