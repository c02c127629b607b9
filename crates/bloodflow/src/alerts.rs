use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::emphasis::{emphasis_for_severity, Emphasis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Operational notice shown on the dashboard. Alerts have no lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub severity: AlertSeverity,
    pub message: String,
    pub raised_at: NaiveDateTime,
    pub suggested_action: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    pub id: u32,
    pub severity: AlertSeverity,
    pub severity_label: &'static str,
    pub emphasis: Emphasis,
    pub message: String,
    pub raised_at: NaiveDateTime,
    pub age_label: String,
    pub suggested_action: String,
}

impl Alert {
    pub fn to_view(&self, now: NaiveDateTime) -> AlertView {
        AlertView {
            id: self.id,
            severity: self.severity,
            severity_label: self.severity.label(),
            emphasis: emphasis_for_severity(self.severity),
            message: self.message.clone(),
            raised_at: self.raised_at,
            age_label: age_label(self.raised_at, now),
            suggested_action: self.suggested_action.clone(),
        }
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Relative age in the coarsest whole unit; timestamps in the future read as "just now".
pub fn age_label(raised_at: NaiveDateTime, now: NaiveDateTime) -> String {
    let elapsed = now - raised_at;
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if elapsed.num_hours() < 24 {
        plural(elapsed.num_hours(), "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}

/// Critical alerts first, then newest first within a severity.
pub fn prioritize(alerts: &[Alert]) -> Vec<&Alert> {
    let mut ordered: Vec<&Alert> = alerts.iter().collect();
    ordered.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| b.raised_at.cmp(&a.raised_at))
    });
    ordered
}
