//! Server settings loaded via OrthoConfig.
//!
//! Values come from `TODO_APP_*` environment variables, configuration files,
//! and command-line flags, in OrthoConfig's usual precedence.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{CredentialRecord, FIXTURE_EMAIL, FIXTURE_PASSWORD};

const DEFAULT_HOST: &str = "0.0.0.0";

/// Settings for the `todo-backend` server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODO_APP")]
pub struct TodoAppSettings {
    /// Interface address to bind; defaults to all IPv4 interfaces.
    pub host: Option<String>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Replacement for the fixture login email.
    pub login_email: Option<String>,
    /// Replacement for the fixture login password.
    pub login_password: Option<String>,
}

impl TodoAppSettings {
    /// Socket address the server binds to.
    ///
    /// # Errors
    /// Returns an error when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let host: IpAddr = self.host.as_deref().unwrap_or(DEFAULT_HOST).trim().parse()?;
        Ok(SocketAddr::new(host, self.port))
    }

    /// The credential record accepted at login.
    ///
    /// Overrides apply per field; the identity stays the fixture user.
    pub fn credential_record(&self) -> CredentialRecord {
        CredentialRecord::default().with_login(
            self.login_email.as_deref().unwrap_or(FIXTURE_EMAIL),
            self.login_password.as_deref().unwrap_or(FIXTURE_PASSWORD),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use crate::domain::LoginCredentials;

    const VARS: [&str; 4] = [
        "TODO_APP_HOST",
        "TODO_APP_PORT",
        "TODO_APP_LOGIN_EMAIL",
        "TODO_APP_LOGIN_PASSWORD",
    ];

    fn load_from_empty_args() -> TodoAppSettings {
        TodoAppSettings::load_from_iter([OsString::from("todo-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_bind_all_interfaces_on_8080() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default host parses"),
            "0.0.0.0:8080".parse().expect("addr")
        );
        let user = settings
            .credential_record()
            .authenticate(&LoginCredentials::new(FIXTURE_EMAIL, FIXTURE_PASSWORD));
        assert!(user.is_some(), "fixture login stays valid by default");
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TODO_APP_HOST", Some("127.0.0.1".to_owned())),
            ("TODO_APP_PORT", Some("9090".to_owned())),
            ("TODO_APP_LOGIN_EMAIL", Some("ops@example.com".to_owned())),
            ("TODO_APP_LOGIN_PASSWORD", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("host parses"),
            "127.0.0.1:9090".parse().expect("addr")
        );
        let record = settings.credential_record();
        assert!(
            record
                .authenticate(&LoginCredentials::new("ops@example.com", FIXTURE_PASSWORD))
                .is_some()
        );
        assert!(
            record
                .authenticate(&LoginCredentials::new(FIXTURE_EMAIL, FIXTURE_PASSWORD))
                .is_none()
        );
    }

    #[rstest]
    fn hostnames_are_rejected() {
        let settings = TodoAppSettings {
            host: Some("localhost".to_owned()),
            port: 8080,
            login_email: None,
            login_password: None,
        };
        assert!(settings.bind_addr().is_err());
    }
}
