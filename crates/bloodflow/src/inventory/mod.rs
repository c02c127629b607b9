//! Blood stock classification: per-type status tiers and the dashboard totals
//! derived from them.

pub mod domain;
pub mod policy;
pub mod summary;

pub use domain::{BloodType, InventoryInput, InventoryRecord, InventoryStatus};
pub use policy::{
    classify_inventory_status, delta_label, inventory_delta, StatusPolicy, DEFAULT_CRITICAL_RATIO,
};
pub use summary::{aggregate_inventory, ClassifiedInventory, InventoryCardView, InventorySummary};
