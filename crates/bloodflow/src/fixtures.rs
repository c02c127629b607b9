//! Static sample records that stand in for a data backend.
//!
//! Every collection is rebuilt on each call; nothing here is shared or mutable.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::alerts::{Alert, AlertSeverity};
use crate::demand::{
    BloodDrive, DataSourceMetric, DemandDriver, ForecastPoint, MultiSourcePrediction,
};
use crate::donor::{
    Credential, DonationRequest, DonorProfile, PeerReview, RequestUrgency, VerificationStatus,
};
use crate::inventory::{BloodType, InventoryRecord};
use crate::risk::{DistrictRecord, ImpactTier, Probability, RiskFactor};

use BloodType::*;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Moment the sample data describes; relative labels are computed against it.
pub fn reference_time() -> NaiveDateTime {
    day(2024, 12, 25).and_hms_opt(10, 0, 0).unwrap_or_default()
}

fn stock(blood_type: BloodType, current_units: u32, required_units: u32) -> InventoryRecord {
    InventoryRecord {
        blood_type,
        current_units,
        required_units,
    }
}

pub fn blood_inventory() -> Vec<InventoryRecord> {
    vec![
        stock(OPositive, 45, 60),
        stock(APositive, 78, 50),
        stock(BPositive, 32, 40),
        stock(AbPositive, 25, 20),
        stock(ONegative, 15, 30),
        stock(ANegative, 28, 25),
        stock(BNegative, 12, 20),
        stock(AbNegative, 8, 10),
    ]
}

pub fn demand_forecast() -> Vec<ForecastPoint> {
    [
        ("Mon", 85, Some(82)),
        ("Tue", 92, Some(89)),
        ("Wed", 78, Some(75)),
        ("Thu", 95, Some(98)),
        ("Fri", 88, Some(85)),
        ("Sat", 72, Some(70)),
        ("Sun", 65, None),
    ]
    .into_iter()
    .map(|(day, predicted, actual)| ForecastPoint {
        day: day.to_string(),
        predicted,
        actual,
    })
    .collect()
}

pub fn alerts() -> Vec<Alert> {
    let now = reference_time();
    vec![
        Alert {
            id: 1,
            severity: AlertSeverity::Critical,
            message: "B- blood type critically low (12 units remaining)".to_string(),
            raised_at: now - Duration::minutes(2),
            suggested_action: "Schedule emergency drive".to_string(),
        },
        Alert {
            id: 2,
            severity: AlertSeverity::Warning,
            message: "O+ demand spike predicted for tomorrow (+25%)".to_string(),
            raised_at: now - Duration::minutes(15),
            suggested_action: "Contact donors".to_string(),
        },
        Alert {
            id: 3,
            severity: AlertSeverity::Info,
            message: "Successful blood drive completed - 45 new units".to_string(),
            raised_at: now - Duration::hours(1),
            suggested_action: "Update inventory".to_string(),
        },
    ]
}

pub fn upcoming_drives() -> Vec<BloodDrive> {
    vec![
        BloodDrive {
            id: 1,
            location: "Central Community Center".to_string(),
            scheduled_for: "Tomorrow, 9:00 AM".to_string(),
            expected_donors: 25,
            target_types: vec![ONegative, BNegative],
        },
        BloodDrive {
            id: 2,
            location: "University Campus".to_string(),
            scheduled_for: "Dec 28, 2:00 PM".to_string(),
            expected_donors: 40,
            target_types: vec![APositive, OPositive],
        },
    ]
}

fn driver(
    factor: &str,
    description: &str,
    impact: ImpactTier,
    confidence: f32,
    blood_types: Vec<BloodType>,
) -> DemandDriver {
    DemandDriver {
        factor: factor.to_string(),
        description: description.to_string(),
        impact,
        confidence: Probability(confidence),
        blood_types,
    }
}

pub fn demand_drivers() -> Vec<DemandDriver> {
    vec![
        driver(
            "Climate Data",
            "Monsoon season increases accident rates by 35%",
            ImpactTier::High,
            0.92,
            vec![OPositive, ONegative],
        ),
        driver(
            "Social Events",
            "Music festival this weekend - 50K attendees",
            ImpactTier::Medium,
            0.87,
            vec![APositive, BPositive],
        ),
        driver(
            "Disease Outbreak",
            "Dengue cases rising in District 5",
            ImpactTier::High,
            0.94,
            vec![APositive, AbPositive],
        ),
        driver(
            "Surgery Backlog",
            "Cardiac surgery queue increased 40%",
            ImpactTier::Critical,
            0.96,
            vec![ONegative, ANegative],
        ),
    ]
}

fn source(
    name: &str,
    accuracy: f32,
    data_points: u64,
    update_frequency: &str,
    impact: ImpactTier,
) -> DataSourceMetric {
    DataSourceMetric {
        source: name.to_string(),
        accuracy: Probability(accuracy),
        data_points,
        update_frequency: update_frequency.to_string(),
        impact,
    }
}

pub fn data_sources() -> Vec<DataSourceMetric> {
    vec![
        source("Historical Transfusion Data", 0.94, 2_500_000, "Real-time", ImpactTier::High),
        source("Climate & Weather Data", 0.87, 150_000, "Hourly", ImpactTier::High),
        source("Social Events Calendar", 0.91, 45_000, "Daily", ImpactTier::Medium),
        source("Demographics & Health Stats", 0.89, 890_000, "Weekly", ImpactTier::High),
        source("Emergency Services Data", 0.96, 75_000, "Real-time", ImpactTier::Critical),
    ]
}

pub fn multi_source_predictions() -> Vec<MultiSourcePrediction> {
    [
        ((2024, 12, 26), [85, 92, 78, 88, 95, 89]),
        ((2024, 12, 27), [82, 88, 85, 84, 90, 86]),
        ((2024, 12, 28), [78, 85, 95, 82, 88, 91]),
        ((2024, 12, 29), [88, 90, 72, 86, 85, 84]),
    ]
    .into_iter()
    .map(
        |((y, m, d), [baseline, climate, events, demographics, emergency, combined])| {
            MultiSourcePrediction {
                date: day(y, m, d),
                baseline,
                climate,
                events,
                demographics,
                emergency,
                combined,
            }
        },
    )
    .collect()
}

fn factor(
    name: &str,
    description: &str,
    probability: f32,
    impact: ImpactTier,
    affected_blood_types: Vec<BloodType>,
    timeframe: &str,
) -> RiskFactor {
    RiskFactor {
        name: name.to_string(),
        description: description.to_string(),
        probability: Probability(probability),
        impact,
        affected_blood_types,
        timeframe: timeframe.to_string(),
    }
}

pub fn risk_factors() -> Vec<RiskFactor> {
    vec![
        factor(
            "Monsoon Season",
            "Heavy rainfall increases accident rates by 35%",
            0.85,
            ImpactTier::High,
            vec![OPositive, ONegative],
            "Next 7 days",
        ),
        factor(
            "Music Festival",
            "50,000 attendees expected downtown",
            0.72,
            ImpactTier::Medium,
            vec![APositive, BPositive],
            "This weekend",
        ),
        factor(
            "Dengue Outbreak",
            "Cases rising 40% in District 5",
            0.91,
            ImpactTier::Critical,
            vec![APositive, AbPositive],
            "Ongoing",
        ),
        factor(
            "Surgery Backlog",
            "Cardiac surgery queue increased post-holiday",
            0.88,
            ImpactTier::High,
            vec![ONegative, ANegative],
            "Next 14 days",
        ),
    ]
}

fn district(name: &str, risk_score: u8, population: u32, hospital_count: u32) -> DistrictRecord {
    DistrictRecord {
        name: name.to_string(),
        risk_score,
        population,
        hospital_count,
    }
}

pub fn districts() -> Vec<DistrictRecord> {
    vec![
        district("Downtown", 85, 250_000, 8),
        district("Midtown", 72, 180_000, 5),
        district("Uptown", 91, 320_000, 12),
        district("Suburbs", 58, 150_000, 3),
        district("Industrial", 76, 95_000, 2),
    ]
}

pub fn donor_profile() -> DonorProfile {
    DonorProfile {
        name: "Sarah Johnson".to_string(),
        blood_type: APositive,
        total_donations: 23,
        last_donation: day(2024, 11, 15),
        next_eligible: day(2024, 12, 29),
        reward_points: 2340,
        badges: vec![
            "Regular Donor".to_string(),
            "Life Saver".to_string(),
            "Community Hero".to_string(),
        ],
        credential_id: "0x742d35Cc6634C0532925a3b8D4C0d8b3f8e8f8e8".to_string(),
        verification: VerificationStatus::Verified,
    }
}

pub fn credentials() -> Vec<Credential> {
    [
        (
            "Blood Type Verification",
            "Verified",
            "Central Lab Network",
            day(2024, 1, 15),
            "0x8f2a...c4d9",
        ),
        (
            "Health Screening",
            "Valid",
            "Regional Health Authority",
            day(2024, 12, 1),
            "0x3b7e...f2a1",
        ),
        (
            "Donation History",
            "23 donations",
            "BloodFlow Network",
            day(2024, 12, 25),
            "0x9c4f...e8b3",
        ),
    ]
    .into_iter()
    .map(|(kind, status, issuer, issued_on, hash)| Credential {
        kind: kind.to_string(),
        status: status.to_string(),
        issuer: issuer.to_string(),
        issued_on,
        hash: hash.to_string(),
    })
    .collect()
}

pub fn peer_reviews() -> Vec<PeerReview> {
    [
        (
            "City General Hospital",
            5,
            "Excellent donor experience, professional staff",
            day(2024, 12, 20),
        ),
        (
            "St. Mary's Medical Center",
            5,
            "Quick processing, clean facilities",
            day(2024, 12, 10),
        ),
        (
            "University Hospital",
            4,
            "Good service, minor wait time",
            day(2024, 11, 28),
        ),
    ]
    .into_iter()
    .map(|(hospital, rating, comment, reviewed_on)| PeerReview {
        hospital: hospital.to_string(),
        rating,
        comment: comment.to_string(),
        reviewed_on,
    })
    .collect()
}

pub fn nearby_requests() -> Vec<DonationRequest> {
    vec![
        DonationRequest {
            id: 1,
            hospital: "City General Hospital".to_string(),
            address: "123 Medical Center Dr".to_string(),
            blood_type: APositive,
            urgency: RequestUrgency::Critical,
            distance_km: 0.8,
            wait_minutes: 5,
            units_needed: 15,
            incentive: "Free coffee + $10 voucher".to_string(),
        },
        DonationRequest {
            id: 2,
            hospital: "St. Mary's Medical Center".to_string(),
            address: "456 Healthcare Ave".to_string(),
            blood_type: ONegative,
            urgency: RequestUrgency::High,
            distance_km: 1.2,
            wait_minutes: 12,
            units_needed: 8,
            incentive: "Priority parking + Badge".to_string(),
        },
        DonationRequest {
            id: 3,
            hospital: "University Hospital".to_string(),
            address: "789 Campus Blvd".to_string(),
            blood_type: BPositive,
            urgency: RequestUrgency::Medium,
            distance_km: 2.1,
            wait_minutes: 8,
            units_needed: 12,
            incentive: "Health screening + Points".to_string(),
        },
    ]
}
