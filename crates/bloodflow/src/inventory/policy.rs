use serde::Serialize;

use super::domain::{InventoryRecord, InventoryStatus};
use crate::error::ClassificationError;

/// Default stock ratio under which a blood type is considered critical.
pub const DEFAULT_CRITICAL_RATIO: f64 = 0.6;

/// Threshold policy used to turn stock levels into a status tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusPolicy {
    critical_ratio: f64,
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self {
            critical_ratio: DEFAULT_CRITICAL_RATIO,
        }
    }
}

impl StatusPolicy {
    /// Build a policy with a custom critical cutoff in `(0, 1]`.
    pub fn new(critical_ratio: f64) -> Result<Self, ClassificationError> {
        if !(critical_ratio > 0.0 && critical_ratio <= 1.0) {
            return Err(ClassificationError::CriticalRatioOutOfRange {
                ratio: critical_ratio,
            });
        }

        Ok(Self { critical_ratio })
    }

    pub fn critical_ratio(&self) -> f64 {
        self.critical_ratio
    }

    pub fn classify(
        &self,
        current: u32,
        required: u32,
    ) -> Result<InventoryStatus, ClassificationError> {
        if required == 0 {
            return Err(ClassificationError::NonPositiveRequirement {
                required: i64::from(required),
            });
        }

        Ok(self.status_for(current, required))
    }

    /// Records guarantee a positive requirement, so this never fails.
    pub fn classify_record(&self, record: &InventoryRecord) -> InventoryStatus {
        self.status_for(record.current_units(), record.required_units())
    }

    fn status_for(&self, current: u32, required: u32) -> InventoryStatus {
        if current >= required {
            return InventoryStatus::Good;
        }

        let ratio = f64::from(current) / f64::from(required);
        if ratio < self.critical_ratio {
            InventoryStatus::Critical
        } else {
            InventoryStatus::Low
        }
    }
}

/// Classify stock against the default policy.
pub fn classify_inventory_status(
    current: u32,
    required: u32,
) -> Result<InventoryStatus, ClassificationError> {
    StatusPolicy::default().classify(current, required)
}

/// Signed shortfall: positive means units are still needed, zero or negative is a surplus.
pub fn inventory_delta(current: u32, required: u32) -> i64 {
    i64::from(required) - i64::from(current)
}

/// Human-readable form of [`inventory_delta`].
pub fn delta_label(delta: i64) -> String {
    if delta > 0 {
        format!("{delta} units needed")
    } else {
        format!("+{} surplus", delta.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_the_requirement_is_good() {
        assert_eq!(classify_inventory_status(60, 60).unwrap(), InventoryStatus::Good);
        assert_eq!(classify_inventory_status(78, 50).unwrap(), InventoryStatus::Good);
    }

    #[test]
    fn cutoff_boundary_resolves_to_low() {
        assert_eq!(classify_inventory_status(12, 20).unwrap(), InventoryStatus::Low);
        assert_eq!(classify_inventory_status(11, 20).unwrap(), InventoryStatus::Critical);
        assert_eq!(classify_inventory_status(0, 20).unwrap(), InventoryStatus::Critical);
    }

    #[test]
    fn zero_requirement_is_invalid_input() {
        let err = classify_inventory_status(5, 0).expect_err("zero requirement");
        assert!(matches!(
            err,
            ClassificationError::NonPositiveRequirement { required: 0 }
        ));
    }

    #[test]
    fn status_never_worsens_as_stock_grows() {
        let policy = StatusPolicy::default();
        for required in [1_u32, 7, 10, 30, 60] {
            let mut previous = InventoryStatus::Critical;
            for current in 0..=required * 2 {
                let status = policy.classify(current, required).unwrap();
                assert!(
                    status >= previous,
                    "status regressed at {current}/{required}"
                );
                previous = status;
            }
        }
    }

    #[test]
    fn custom_cutoff_moves_the_critical_band() {
        let strict = StatusPolicy::new(0.9).expect("valid ratio");
        assert_eq!(strict.classify(45, 60).unwrap(), InventoryStatus::Critical);

        let lenient = StatusPolicy::new(0.5).expect("valid ratio");
        assert_eq!(lenient.classify(15, 30).unwrap(), InventoryStatus::Low);
    }

    #[test]
    fn cutoff_must_be_a_fraction() {
        assert!(StatusPolicy::new(0.0).is_err());
        assert!(StatusPolicy::new(1.2).is_err());
        assert!(StatusPolicy::new(f64::NAN).is_err());
        assert!(StatusPolicy::new(1.0).is_ok());
    }

    #[test]
    fn delta_reports_deficit_and_surplus() {
        assert_eq!(inventory_delta(45, 60), 15);
        assert_eq!(inventory_delta(78, 50), -28);
        assert_eq!(delta_label(15), "15 units needed");
        assert_eq!(delta_label(-28), "+28 surplus");
        assert_eq!(delta_label(0), "+0 surplus");

        for (current, required) in [(0_u32, 1_u32), (45, 60), (78, 50), (u32::MAX, 1)] {
            let delta = inventory_delta(current, required);
            assert_eq!(i64::from(required) - delta, i64::from(current));
        }
    }
}
