use chrono::NaiveDate;
use serde::Serialize;

use crate::donor::{
    average_rating, Credential, DonationRequest, DonationRequestView, DonorProfile, PeerReview,
};
use crate::fixtures;
use crate::inventory::BloodType;

#[derive(Debug, Clone)]
pub struct DonorData {
    pub profile: DonorProfile,
    pub credentials: Vec<Credential>,
    pub reviews: Vec<PeerReview>,
    pub requests: Vec<DonationRequest>,
}

impl DonorData {
    pub fn sample() -> Self {
        Self {
            profile: fixtures::donor_profile(),
            credentials: fixtures::credentials(),
            reviews: fixtures::peer_reviews(),
            requests: fixtures::nearby_requests(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DonorProfileView {
    pub name: String,
    pub initials: String,
    pub blood_type: BloodType,
    pub total_donations: u32,
    pub last_donation: NaiveDate,
    pub next_eligible: NaiveDate,
    pub reward_points: u32,
    pub badges: Vec<String>,
    pub credential_id: String,
    pub verification: &'static str,
}

impl From<&DonorProfile> for DonorProfileView {
    fn from(profile: &DonorProfile) -> Self {
        Self {
            name: profile.name.clone(),
            initials: profile.initials(),
            blood_type: profile.blood_type,
            total_donations: profile.total_donations,
            last_donation: profile.last_donation,
            next_eligible: profile.next_eligible,
            reward_points: profile.reward_points,
            badges: profile.badges.clone(),
            credential_id: profile.credential_id.clone(),
            verification: profile.verification.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DonorView {
    pub profile: DonorProfileView,
    pub credentials: Vec<Credential>,
    pub reviews: Vec<PeerReview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f32>,
    pub requests: Vec<DonationRequestView>,
    pub selected_request: Option<u32>,
}

/// `selected` that names no listed request leaves nothing selected.
pub fn donor_view(data: &DonorData, selected: Option<u32>) -> DonorView {
    let requests: Vec<DonationRequestView> = data
        .requests
        .iter()
        .map(|request| request.to_view(&data.profile, selected == Some(request.id)))
        .collect();
    let selected_request = requests
        .iter()
        .find(|request| request.selected)
        .map(|request| request.id);

    DonorView {
        profile: DonorProfileView::from(&data.profile),
        credentials: data.credentials.clone(),
        reviews: data.reviews.clone(),
        average_rating: average_rating(&data.reviews),
        requests,
        selected_request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emphasis::Emphasis;

    #[test]
    fn selection_marks_exactly_one_request() {
        let view = donor_view(&DonorData::sample(), Some(2));
        assert_eq!(view.selected_request, Some(2));
        let selected: Vec<u32> = view
            .requests
            .iter()
            .filter(|request| request.selected)
            .map(|request| request.id)
            .collect();
        assert_eq!(selected, vec![2]);
    }

    #[test]
    fn unknown_selection_selects_nothing() {
        let view = donor_view(&DonorData::sample(), Some(99));
        assert_eq!(view.selected_request, None);
        assert!(view.requests.iter().all(|request| !request.selected));
    }

    #[test]
    fn requests_carry_urgency_emphasis_and_match_flag() {
        let view = donor_view(&DonorData::sample(), None);
        assert_eq!(view.profile.initials, "SJ");
        assert_eq!(view.requests[0].emphasis, Emphasis::Destructive);
        assert!(view.requests[0].matches_donor);
        assert!(!view.requests[1].matches_donor);
        assert!(view.average_rating.is_some());
    }
}
