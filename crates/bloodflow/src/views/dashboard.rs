use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{parse_tab, ViewError};
use crate::alerts::{prioritize, Alert, AlertView};
use crate::demand::{
    expected_drive_donors, forecast_accuracy, BloodDrive, DemandDriver, DemandDriverView,
    ForecastPoint,
};
use crate::fixtures;
use crate::inventory::{
    aggregate_inventory, InventoryCardView, InventoryRecord, InventorySummary, StatusPolicy,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    #[default]
    Overview,
    Inventory,
    Predictions,
    Drives,
    AiAnalytics,
}

impl DashboardTab {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Overview,
            Self::Inventory,
            Self::Predictions,
            Self::Drives,
            Self::AiAnalytics,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Inventory => "inventory",
            Self::Predictions => "predictions",
            Self::Drives => "drives",
            Self::AiAnalytics => "ai-analytics",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Inventory => "Inventory",
            Self::Predictions => "Predictions",
            Self::Drives => "Blood Drives",
            Self::AiAnalytics => "AI Analytics",
        }
    }

    fn shows_inventory(self) -> bool {
        matches!(self, Self::Overview | Self::Inventory)
    }
}

impl FromStr for DashboardTab {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_tab(value, &Self::ordered(), Self::slug)
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Records feeding the operations dashboard.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub now: NaiveDateTime,
    pub inventory: Vec<InventoryRecord>,
    pub alerts: Vec<Alert>,
    pub forecast: Vec<ForecastPoint>,
    pub drives: Vec<BloodDrive>,
    pub drivers: Vec<DemandDriver>,
}

impl DashboardData {
    pub fn sample() -> Self {
        Self {
            now: fixtures::reference_time(),
            inventory: fixtures::blood_inventory(),
            alerts: fixtures::alerts(),
            forecast: fixtures::demand_forecast(),
            drives: fixtures::upcoming_drives(),
            drivers: fixtures::demand_drivers(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub tab: DashboardTab,
    pub tab_label: &'static str,
    pub generated_at: NaiveDateTime,
    pub critical_ratio: f64,
    pub summary: InventorySummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast_accuracy_pct: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Vec<InventoryCardView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<AlertView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Vec<ForecastPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drives: Option<Vec<BloodDrive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_drive_donors: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand_drivers: Option<Vec<DemandDriverView>>,
}

/// Header figures are always present; the tab selects the detail sections.
pub fn dashboard_view(
    data: &DashboardData,
    policy: &StatusPolicy,
    tab: DashboardTab,
) -> DashboardView {
    let classified = policy.classify_all(&data.inventory);
    let summary = aggregate_inventory(&classified);

    let inventory = tab
        .shows_inventory()
        .then(|| classified.iter().map(|item| item.to_view()).collect());
    let alerts = (tab == DashboardTab::Overview).then(|| {
        prioritize(&data.alerts)
            .into_iter()
            .map(|alert| alert.to_view(data.now))
            .collect()
    });
    let forecast = (tab == DashboardTab::Predictions).then(|| data.forecast.clone());
    let (drives, expected_donors) = if tab == DashboardTab::Drives {
        (
            Some(data.drives.clone()),
            Some(expected_drive_donors(&data.drives)),
        )
    } else {
        (None, None)
    };
    let demand_drivers = (tab == DashboardTab::AiAnalytics)
        .then(|| data.drivers.iter().map(DemandDriver::to_view).collect());

    DashboardView {
        tab,
        tab_label: tab.label(),
        generated_at: data.now,
        critical_ratio: policy.critical_ratio(),
        summary,
        forecast_accuracy_pct: forecast_accuracy(&data.forecast).map(|accuracy| accuracy * 100.0),
        inventory,
        alerts,
        forecast,
        drives,
        expected_drive_donors: expected_donors,
        demand_drivers,
    }
}
