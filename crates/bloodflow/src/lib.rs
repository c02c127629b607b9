//! Core rules for the BloodFlow blood-bank demo: threshold classification of
//! stock, risk scores and probabilities, the shared severity-to-emphasis
//! mapping, and the aggregate views built from sample records.

pub mod alerts;
pub mod auth;
pub mod config;
pub mod demand;
pub mod donor;
pub mod emphasis;
pub mod error;
pub mod fixtures;
pub mod inventory;
pub mod risk;
pub mod telemetry;
pub mod views;

pub use emphasis::{emphasis_for_severity, Emphasis, Severity, SeverityRank};
pub use error::{AppError, ClassificationError};
pub use inventory::{
    aggregate_inventory, classify_inventory_status, InventoryRecord, InventoryStatus,
    InventorySummary, StatusPolicy,
};
pub use risk::{classify_risk_tier, rank_districts_by_risk, DistrictRecord, RiskTier};
