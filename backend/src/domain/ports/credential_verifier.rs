//! Driving port for credential verification.
//!
//! Inbound adapters ask this port whether submitted credentials unlock a
//! user. Swapping in a real identity provider means implementing the trait;
//! nothing that consumes the port changes.

use async_trait::async_trait;

use crate::domain::{CredentialRecord, LoginCredentials, User};

/// Verify submitted credentials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Return the user unlocked by `credentials`, or `None` on any mismatch.
    async fn verify(&self, credentials: &LoginCredentials) -> Option<User>;
}

/// Verifier backed by one static [`CredentialRecord`].
///
/// `StaticCredentialVerifier::default()` accepts `admin@admin.com` / `admin`.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialVerifier {
    record: CredentialRecord,
}

impl StaticCredentialVerifier {
    /// Accept exactly the credentials held by `record`.
    pub fn new(record: CredentialRecord) -> Self {
        Self { record }
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, credentials: &LoginCredentials) -> Option<User> {
        self.record.authenticate(credentials)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{FIXTURE_EMAIL, FIXTURE_PASSWORD, FIXTURE_USER_ID, UserId};
    use rstest::rstest;

    #[rstest]
    #[case(FIXTURE_EMAIL, FIXTURE_PASSWORD, true)]
    #[case(FIXTURE_EMAIL, "password", false)]
    #[case("admin", FIXTURE_PASSWORD, false)]
    #[tokio::test]
    async fn default_verifier_accepts_only_the_fixture(
        #[case] email: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let verifier = StaticCredentialVerifier::default();
        let result = verifier
            .verify(&LoginCredentials::new(email, password))
            .await;
        match (should_succeed, result) {
            (true, Some(user)) => assert_eq!(user.id(), FIXTURE_USER_ID),
            (false, None) => {}
            (true, None) => panic!("expected {email} to authenticate"),
            (false, Some(user)) => panic!("expected denial, got {user:?}"),
        }
    }

    #[tokio::test]
    async fn custom_record_is_honoured() {
        let record = CredentialRecord::new(UserId::new(42), "ops", "ops@example.com", "pw");
        let verifier = StaticCredentialVerifier::new(record);
        let user = verifier
            .verify(&LoginCredentials::new("ops@example.com", "pw"))
            .await
            .expect("custom record matches");
        assert_eq!(user.id(), UserId::new(42));
        assert_eq!(user.name(), "ops");
    }
}
