//! Authenticated user record.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Integer user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// User produced by a successful authentication.
///
/// The record is transient: it is handed to the session layer and never
/// stored by this crate. The password is never serialised.
///
/// # Examples
/// ```
/// use backend::domain::{User, UserId};
///
/// let user = User::new(UserId::new(1), "test user", "admin@admin.com", "admin");
/// let json = serde_json::to_value(&user).expect("serialise");
/// assert!(json.get("password").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    #[schema(example = "test user")]
    name: String,
    #[schema(example = "admin@admin.com")]
    email: String,
    #[serde(default, skip_serializing)]
    #[schema(ignore)]
    password: String,
}

impl User {
    /// Assemble a user record.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Identifier stored in the session.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email the user authenticated with.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password the user authenticated with.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_password() {
        let user = User::new(UserId::new(1), "test user", "admin@admin.com", "admin");
        let rendered = format!("{user:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("\"admin\""));
    }

    #[test]
    fn serialises_without_password() {
        let user = User::new(UserId::new(1), "test user", "admin@admin.com", "admin");
        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(
            value,
            serde_json::json!({ "id": 1, "name": "test user", "email": "admin@admin.com" })
        );
    }
}
