//! Authentication primitives: submitted credentials, the accepted credential
//! record, and the gate comparing the two.
//!
//! The gate is an allowlist of exactly one entry. A mismatch is not an error;
//! it is reported as `None` and the inbound adapter decides how to surface the
//! denial.

use std::fmt;

use zeroize::Zeroizing;

use super::{User, UserId};

/// Email accepted by the default credential record.
pub const FIXTURE_EMAIL: &str = "admin@admin.com";
/// Password accepted by the default credential record.
pub const FIXTURE_PASSWORD: &str = "admin";
/// Identifier of the user produced by the default credential record.
pub const FIXTURE_USER_ID: UserId = UserId::new(1);
/// Display name of the user produced by the default credential record.
pub const FIXTURE_USER_NAME: &str = "test user";

/// Credentials as submitted by a client.
///
/// No shape validation happens here: empty strings are legal and simply fail
/// to match any record.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Capture submitted credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Submitted email.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Submitted password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The single credential pair accepted by the gate, together with the
/// identity it unlocks.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    user_id: UserId,
    name: String,
    email: String,
    password: Zeroizing<String>,
}

impl CredentialRecord {
    /// Build a record accepting `email`/`password` for the given identity.
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            name: name.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Replace the accepted email and password, keeping the identity.
    #[must_use]
    pub fn with_login(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.email = email.into();
        self.password = Zeroizing::new(password.into());
        self
    }

    /// Email accepted by this record.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Compare submitted credentials against the record.
    ///
    /// Both fields must match exactly. On success the returned user echoes the
    /// submitted email and password, which by the match condition equal the
    /// record's values.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{CredentialRecord, LoginCredentials};
    ///
    /// let record = CredentialRecord::default();
    /// let user = record
    ///     .authenticate(&LoginCredentials::new("admin@admin.com", "admin"))
    ///     .expect("fixture credentials match");
    /// assert_eq!(user.email(), "admin@admin.com");
    /// assert!(record.authenticate(&LoginCredentials::new("admin@admin.com", "")).is_none());
    /// ```
    pub fn authenticate(&self, credentials: &LoginCredentials) -> Option<User> {
        if credentials.email() != self.email || credentials.password() != self.password.as_str() {
            return None;
        }
        Some(User::new(
            self.user_id,
            self.name.as_str(),
            credentials.email(),
            credentials.password(),
        ))
    }
}

impl Default for CredentialRecord {
    fn default() -> Self {
        Self::new(
            FIXTURE_USER_ID,
            FIXTURE_USER_NAME,
            FIXTURE_EMAIL,
            FIXTURE_PASSWORD,
        )
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Check credentials against the default fixture record.
pub fn authenticate(email: &str, password: &str) -> Option<User> {
    CredentialRecord::default().authenticate(&LoginCredentials::new(email, password))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin@admin.com", "wrong")]
    #[case("someone@else.com", "admin")]
    #[case("", "")]
    #[case("admin@admin.com", "")]
    #[case("", "admin")]
    #[case("ADMIN@ADMIN.COM", "admin")]
    #[case(" admin@admin.com", "admin")]
    #[case("admin@admin.com", "admin ")]
    fn any_mismatch_is_denied(#[case] email: &str, #[case] password: &str) {
        assert!(authenticate(email, password).is_none());
    }

    #[rstest]
    fn fixture_pair_yields_the_fixture_user() {
        let user = authenticate(FIXTURE_EMAIL, FIXTURE_PASSWORD).expect("fixture match");
        assert_eq!(user.id(), FIXTURE_USER_ID);
        assert_eq!(user.name(), FIXTURE_USER_NAME);
        assert_eq!(user.email(), FIXTURE_EMAIL);
        assert_eq!(user.password(), FIXTURE_PASSWORD);
    }

    #[rstest]
    fn overridden_login_replaces_the_fixture_pair() {
        let record = CredentialRecord::default().with_login("ops@example.com", "s3cret");
        assert!(
            record
                .authenticate(&LoginCredentials::new(FIXTURE_EMAIL, FIXTURE_PASSWORD))
                .is_none()
        );
        let user = record
            .authenticate(&LoginCredentials::new("ops@example.com", "s3cret"))
            .expect("overridden pair matches");
        assert_eq!(user.id(), FIXTURE_USER_ID);
        assert_eq!(user.email(), "ops@example.com");
    }

    #[rstest]
    fn debug_output_hides_passwords() {
        let rendered = format!(
            "{:?} {:?}",
            CredentialRecord::default(),
            LoginCredentials::new("a@b.c", "hunter2")
        );
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("\"admin\""));
    }
}
