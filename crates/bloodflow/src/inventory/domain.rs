use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ClassificationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB-")]
    AbNegative,
}

impl BloodType {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::OPositive,
            Self::APositive,
            Self::BPositive,
            Self::AbPositive,
            Self::ONegative,
            Self::ANegative,
            Self::BNegative,
            Self::AbNegative,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OPositive => "O+",
            Self::APositive => "A+",
            Self::BPositive => "B+",
            Self::AbPositive => "AB+",
            Self::ONegative => "O-",
            Self::ANegative => "A-",
            Self::BNegative => "B-",
            Self::AbNegative => "AB-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sufficiency of stock relative to the required level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    Critical,
    Low,
    Good,
}

impl InventoryStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Low => "low",
            Self::Good => "good",
        }
    }
}

/// Stock level for one blood type.
///
/// `required_units` is always positive; construction goes through
/// [`InventoryRecord::new`] (or its serde equivalent) so classification over a
/// record cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InventoryInput")]
pub struct InventoryRecord {
    pub(crate) blood_type: BloodType,
    pub(crate) current_units: u32,
    pub(crate) required_units: u32,
}

impl InventoryRecord {
    pub fn new(
        blood_type: BloodType,
        current_units: u32,
        required_units: u32,
    ) -> Result<Self, ClassificationError> {
        if required_units == 0 {
            return Err(ClassificationError::NonPositiveRequirement {
                required: i64::from(required_units),
            });
        }

        Ok(Self {
            blood_type,
            current_units,
            required_units,
        })
    }

    pub fn blood_type(&self) -> BloodType {
        self.blood_type
    }

    pub fn current_units(&self) -> u32 {
        self.current_units
    }

    pub fn required_units(&self) -> u32 {
        self.required_units
    }

    /// Stock as a percentage of the required level, uncapped.
    pub fn stock_pct(&self) -> f32 {
        self.current_units as f32 * 100.0 / self.required_units as f32
    }
}

/// Unvalidated wire form of [`InventoryRecord`]. Unit counts are signed so
/// negative values reach validation instead of failing to parse.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryInput {
    pub blood_type: BloodType,
    pub current_units: i64,
    pub required_units: i64,
}

fn unit_count(units: i64) -> Result<u32, ClassificationError> {
    u32::try_from(units).map_err(|_| ClassificationError::UnitCountOutOfRange { units })
}

impl TryFrom<InventoryInput> for InventoryRecord {
    type Error = ClassificationError;

    fn try_from(raw: InventoryInput) -> Result<Self, Self::Error> {
        if raw.required_units <= 0 {
            return Err(ClassificationError::NonPositiveRequirement {
                required: raw.required_units,
            });
        }
        let required_units = unit_count(raw.required_units)?;
        let current_units = unit_count(raw.current_units)?;
        Self::new(raw.blood_type, current_units, required_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blood_types_use_clinical_notation_on_the_wire() {
        let encoded = serde_json::to_string(&BloodType::AbNegative).expect("serializes");
        assert_eq!(encoded, "\"AB-\"");

        let decoded: BloodType = serde_json::from_str("\"O+\"").expect("deserializes");
        assert_eq!(decoded, BloodType::OPositive);
    }

    #[test]
    fn zero_requirement_is_rejected_at_construction() {
        let err = InventoryRecord::new(BloodType::ONegative, 4, 0).expect_err("zero required");
        assert!(matches!(
            err,
            ClassificationError::NonPositiveRequirement { required: 0 }
        ));
    }

    #[test]
    fn deserializing_enforces_positive_requirement() {
        let payload = r#"{"blood_type":"B-","current_units":3,"required_units":0}"#;
        let result: Result<InventoryRecord, _> = serde_json::from_str(payload);
        assert!(result.is_err());

        let payload = r#"{"blood_type":"B-","current_units":12,"required_units":20}"#;
        let record: InventoryRecord = serde_json::from_str(payload).expect("valid record");
        assert_eq!(record.blood_type(), BloodType::BNegative);
        assert!((record.stock_pct() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn negative_counts_fail_validation_not_parsing() {
        let input: InventoryInput = serde_json::from_str(
            r#"{"blood_type":"O-","current_units":4,"required_units":-5}"#,
        )
        .expect("signed counts parse");
        assert_eq!(
            InventoryRecord::try_from(input),
            Err(ClassificationError::NonPositiveRequirement { required: -5 })
        );

        let input = InventoryInput {
            blood_type: BloodType::ONegative,
            current_units: -1,
            required_units: 30,
        };
        assert_eq!(
            InventoryRecord::try_from(input),
            Err(ClassificationError::UnitCountOutOfRange { units: -1 })
        );

        let input = InventoryInput {
            blood_type: BloodType::ONegative,
            current_units: 0,
            required_units: i64::from(u32::MAX) + 1,
        };
        assert!(matches!(
            InventoryRecord::try_from(input),
            Err(ClassificationError::UnitCountOutOfRange { .. })
        ));
    }
}
