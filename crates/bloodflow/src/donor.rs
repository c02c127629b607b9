use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::emphasis::{emphasis_for_severity, Emphasis};
use crate::inventory::BloodType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Unverified,
}

impl VerificationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Pending => "Pending",
            Self::Unverified => "Unverified",
        }
    }
}

/// Donor-facing profile. `next_eligible` is displayed as-is; no eligibility
/// rule is evaluated against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorProfile {
    pub name: String,
    pub blood_type: BloodType,
    pub total_donations: u32,
    pub last_donation: NaiveDate,
    pub next_eligible: NaiveDate,
    pub reward_points: u32,
    pub badges: Vec<String>,
    pub credential_id: String,
    pub verification: VerificationStatus,
}

impl DonorProfile {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub kind: String,
    pub status: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerReview {
    pub hospital: String,
    pub rating: u8,
    pub comment: String,
    pub reviewed_on: NaiveDate,
}

pub fn average_rating(reviews: &[PeerReview]) -> Option<f32> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
    Some(total as f32 / reviews.len() as f32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestUrgency {
    Medium,
    High,
    Critical,
}

impl RequestUrgency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

/// Hospital request surfaced to nearby donors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRequest {
    pub id: u32,
    pub hospital: String,
    pub address: String,
    pub blood_type: BloodType,
    pub urgency: RequestUrgency,
    pub distance_km: f32,
    pub wait_minutes: u32,
    pub units_needed: u32,
    pub incentive: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonationRequestView {
    pub id: u32,
    pub hospital: String,
    pub address: String,
    pub blood_type: BloodType,
    pub urgency: RequestUrgency,
    pub urgency_label: &'static str,
    pub emphasis: Emphasis,
    pub distance_km: f32,
    pub wait_minutes: u32,
    pub units_needed: u32,
    pub incentive: String,
    pub selected: bool,
    pub matches_donor: bool,
}

impl DonationRequest {
    pub fn to_view(&self, donor: &DonorProfile, selected: bool) -> DonationRequestView {
        DonationRequestView {
            id: self.id,
            hospital: self.hospital.clone(),
            address: self.address.clone(),
            blood_type: self.blood_type,
            urgency: self.urgency,
            urgency_label: self.urgency.label(),
            emphasis: emphasis_for_severity(self.urgency),
            distance_km: self.distance_km,
            wait_minutes: self.wait_minutes,
            units_needed: self.units_needed,
            incentive: self.incentive.clone(),
            selected,
            matches_donor: self.blood_type == donor.blood_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> PeerReview {
        PeerReview {
            hospital: "City General Hospital".to_string(),
            rating,
            comment: String::new(),
            reviewed_on: NaiveDate::from_ymd_opt(2024, 12, 20).expect("valid date"),
        }
    }

    #[test]
    fn average_rating_handles_empty_reviews() {
        assert_eq!(average_rating(&[]), None);
        let average = average_rating(&[review(5), review(5), review(4)]).expect("rated");
        assert!((average - 14.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn urgency_uses_shared_emphasis() {
        assert_eq!(emphasis_for_severity(RequestUrgency::Critical), Emphasis::Destructive);
        assert_eq!(emphasis_for_severity(RequestUrgency::High), Emphasis::Secondary);
        assert_eq!(emphasis_for_severity(RequestUrgency::Medium), Emphasis::Outline);
    }
}
