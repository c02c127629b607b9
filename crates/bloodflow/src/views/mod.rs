//! Serializable snapshots of the three screens. Tab and selection state is
//! passed in by the caller and decides which sections are populated.

pub mod analytics;
pub mod dashboard;
pub mod donor;

pub use analytics::{analytics_view, AnalyticsData, AnalyticsTab, AnalyticsView, PredictionRow};
pub use dashboard::{dashboard_view, DashboardData, DashboardTab, DashboardView};
pub use donor::{donor_view, DonorData, DonorView};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("unknown tab '{tab}' (expected one of: {expected})")]
    UnknownTab { tab: String, expected: String },
}

pub(crate) fn parse_tab<T: Copy>(
    value: &str,
    tabs: &[T],
    slug: impl Fn(T) -> &'static str,
) -> Result<T, ViewError> {
    let wanted = value.trim().to_ascii_lowercase();
    tabs.iter()
        .copied()
        .find(|tab| slug(*tab) == wanted)
        .ok_or_else(|| ViewError::UnknownTab {
            tab: value.to_string(),
            expected: tabs
                .iter()
                .map(|tab| slug(*tab))
                .collect::<Vec<_>>()
                .join(", "),
        })
}
