//! Sign-in and organization registration. No credential store exists; the
//! only implementation validates form input, waits, and issues a session.

mod mock;

pub use mock::MockAuthenticator;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Where a successful sign-in lands the caller.
pub const DASHBOARD_REDIRECT: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrganizationType {
    BloodBank,
    Hospital,
    HealthMinistry,
}

impl OrganizationType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::BloodBank => "Blood Bank",
            Self::Hospital => "Hospital",
            Self::HealthMinistry => "Health Ministry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    NorthAmerica,
    Europe,
    AsiaPacific,
    Africa,
    SouthAmerica,
}

impl Region {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::Europe => "Europe",
            Self::AsiaPacific => "Asia Pacific",
            Self::Africa => "Africa",
            Self::SouthAmerica => "South America",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Registration {
    pub organization_type: OrganizationType,
    pub organization_name: String,
    pub contact_email: String,
    pub region: Region,
    pub password: String,
    #[serde(default)]
    pub accepted_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub remember_me: bool,
    pub redirect_to: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("email is required")]
    MissingEmail,
    #[error("'{0}' is not a valid email address")]
    MalformedEmail(String),
    #[error("password is required")]
    MissingPassword,
    #[error("organization name is required")]
    MissingOrganization,
    #[error("terms of service must be accepted")]
    TermsNotAccepted,
}

/// Authentication collaborator consumed by the HTTP layer.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn sign_in(&self, request: SignInRequest) -> Result<Session, AuthError>;
    async fn register(&self, registration: Registration) -> Result<Session, AuthError>;
}

pub(crate) fn validate_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::MissingEmail);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            Ok(email.to_string())
        }
        _ => Err(AuthError::MalformedEmail(email.to_string())),
    }
}

pub(crate) fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.trim().is_empty() {
        return Err(AuthError::MissingPassword);
    }
    Ok(())
}

impl SignInRequest {
    pub fn validate(&self) -> Result<String, AuthError> {
        let email = validate_email(&self.email)?;
        validate_password(&self.password)?;
        Ok(email)
    }
}

impl Registration {
    pub fn validate(&self) -> Result<String, AuthError> {
        if self.organization_name.trim().is_empty() {
            return Err(AuthError::MissingOrganization);
        }
        let email = validate_email(&self.contact_email)?;
        validate_password(&self.password)?;
        if !self.accepted_terms {
            return Err(AuthError::TermsNotAccepted);
        }
        Ok(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> Registration {
        Registration {
            organization_type: OrganizationType::BloodBank,
            organization_name: "Central Blood Bank".to_string(),
            contact_email: "admin@organization.org".to_string(),
            region: Region::NorthAmerica,
            password: "hunter22".to_string(),
            accepted_terms: true,
        }
    }

    #[test]
    fn email_requires_local_part_and_domain() {
        assert_eq!(validate_email("  "), Err(AuthError::MissingEmail));
        assert!(matches!(
            validate_email("admin"),
            Err(AuthError::MalformedEmail(_))
        ));
        assert!(validate_email("@bloodbank.org").is_err());
        assert_eq!(
            validate_email(" admin@bloodbank.org ").as_deref(),
            Ok("admin@bloodbank.org")
        );
    }

    #[test]
    fn registration_checks_each_required_field() {
        assert!(registration().validate().is_ok());

        let mut missing_name = registration();
        missing_name.organization_name = " ".to_string();
        assert_eq!(missing_name.validate(), Err(AuthError::MissingOrganization));

        let mut no_terms = registration();
        no_terms.accepted_terms = false;
        assert_eq!(no_terms.validate(), Err(AuthError::TermsNotAccepted));
    }

    #[test]
    fn form_values_use_kebab_case() {
        let registration: Registration = serde_json::from_value(serde_json::json!({
            "organization_type": "health-ministry",
            "organization_name": "Ministry of Health",
            "contact_email": "ops@health.gov",
            "region": "asia-pacific",
            "password": "secret",
            "accepted_terms": true
        }))
        .expect("registration parses");
        assert_eq!(registration.organization_type, OrganizationType::HealthMinistry);
        assert_eq!(registration.region.label(), "Asia Pacific");
    }
}
