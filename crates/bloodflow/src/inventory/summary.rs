use serde::Serialize;

use super::domain::{BloodType, InventoryRecord, InventoryStatus};
use super::policy::{delta_label, inventory_delta, StatusPolicy};
use crate::emphasis::{emphasis_for_severity, Emphasis};

/// A record paired with the status the policy assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedInventory {
    pub record: InventoryRecord,
    pub status: InventoryStatus,
}

impl ClassifiedInventory {
    pub fn to_view(&self) -> InventoryCardView {
        let record = &self.record;
        let delta = inventory_delta(record.current_units(), record.required_units());
        InventoryCardView {
            blood_type: record.blood_type(),
            blood_type_label: record.blood_type().label(),
            current_units: record.current_units(),
            required_units: record.required_units(),
            status: self.status,
            status_label: self.status.label(),
            emphasis: emphasis_for_severity(self.status),
            stock_pct: record.stock_pct(),
            delta,
            delta_label: delta_label(delta),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub critical_count: usize,
    pub low_count: usize,
    pub good_count: usize,
    pub total_units: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryCardView {
    pub blood_type: BloodType,
    pub blood_type_label: &'static str,
    pub current_units: u32,
    pub required_units: u32,
    pub status: InventoryStatus,
    pub status_label: &'static str,
    pub emphasis: Emphasis,
    pub stock_pct: f32,
    pub delta: i64,
    pub delta_label: String,
}

impl StatusPolicy {
    pub fn classify_all(&self, records: &[InventoryRecord]) -> Vec<ClassifiedInventory> {
        records
            .iter()
            .map(|record| ClassifiedInventory {
                record: record.clone(),
                status: self.classify_record(record),
            })
            .collect()
    }

    pub fn summarize(&self, records: &[InventoryRecord]) -> InventorySummary {
        aggregate_inventory(&self.classify_all(records))
    }
}

/// Count records by status and total the units on hand.
pub fn aggregate_inventory(classified: &[ClassifiedInventory]) -> InventorySummary {
    classified
        .iter()
        .fold(InventorySummary::default(), |mut summary, entry| {
            match entry.status {
                InventoryStatus::Critical => summary.critical_count += 1,
                InventoryStatus::Low => summary.low_count += 1,
                InventoryStatus::Good => summary.good_count += 1,
            }
            summary.total_units += u64::from(entry.record.current_units());
            summary
        })
}
