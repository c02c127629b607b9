use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use super::{AuthError, Authenticator, Registration, Session, SignInRequest, DASHBOARD_REDIRECT};
use crate::config::AuthConfig;

/// Accepts any well-formed input after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockAuthenticator {
    delay: Duration,
}

impl MockAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.sign_in_delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    async fn settle(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn sign_in(&self, request: SignInRequest) -> Result<Session, AuthError> {
        let email = request.validate().map_err(|err| {
            warn!(error = %err, "sign-in rejected");
            err
        })?;

        self.settle().await;
        info!(%email, remember_me = request.remember_me, "signed in");

        Ok(Session {
            email,
            organization: None,
            remember_me: request.remember_me,
            redirect_to: DASHBOARD_REDIRECT,
        })
    }

    async fn register(&self, registration: Registration) -> Result<Session, AuthError> {
        let email = registration.validate().map_err(|err| {
            warn!(error = %err, "registration rejected");
            err
        })?;

        self.settle().await;
        info!(
            %email,
            organization_type = registration.organization_type.label(),
            region = registration.region.label(),
            "organization registered"
        );

        Ok(Session {
            email,
            organization: Some(registration.organization_name.trim().to_string()),
            remember_me: false,
            redirect_to: DASHBOARD_REDIRECT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{OrganizationType, Region};
    use tokio::time::Instant;

    fn sign_in_request() -> SignInRequest {
        SignInRequest {
            email: "admin@bloodbank.org".to_string(),
            password: "correct horse".to_string(),
            remember_me: true,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn sign_in_waits_then_redirects_to_dashboard() {
        let auth = MockAuthenticator::default();
        let started = Instant::now();

        let session = auth.sign_in(sign_in_request()).await.expect("signed in");

        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(session.redirect_to, "/dashboard");
        assert_eq!(session.email, "admin@bloodbank.org");
        assert!(session.remember_me);
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_input_returns_without_waiting() {
        let auth = MockAuthenticator::default();
        let started = Instant::now();

        let mut request = sign_in_request();
        request.password.clear();
        let err = auth.sign_in(request).await.expect_err("blank password");

        assert_eq!(err, AuthError::MissingPassword);
        assert!(started.elapsed() < Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn register_carries_organization_into_session() {
        let auth = MockAuthenticator::new(Duration::ZERO);
        let session = auth
            .register(Registration {
                organization_type: OrganizationType::Hospital,
                organization_name: " City General Hospital ".to_string(),
                contact_email: "ops@citygeneral.org".to_string(),
                region: Region::Europe,
                password: "s3cret".to_string(),
                accepted_terms: true,
            })
            .await
            .expect("registered");

        assert_eq!(session.organization.as_deref(), Some("City General Hospital"));
        assert_eq!(session.redirect_to, DASHBOARD_REDIRECT);
    }
}
