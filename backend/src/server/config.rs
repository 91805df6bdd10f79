//! HTTP server configuration object.

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use crate::domain::CredentialRecord;
use crate::domain::ports::TodoStore;
use crate::inbound::http::session_config::SessionSettings;

/// Everything [`super::create_server`] needs besides the health flags.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) credentials: CredentialRecord,
    pub(crate) todos: Option<Arc<dyn TodoStore>>,
    pub(crate) listener: Option<TcpListener>,
}

impl ServerConfig {
    /// Construct a configuration with the fixture login and an empty
    /// in-memory store.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            bind_addr,
            credentials: CredentialRecord::default(),
            todos: None,
            listener: None,
        }
    }

    /// Accept `credentials` at login instead of the fixture record.
    #[must_use]
    pub fn with_credentials(mut self, credentials: CredentialRecord) -> Self {
        self.credentials = credentials;
        self
    }

    /// Serve todos from `store` instead of a fresh in-memory store.
    #[must_use]
    pub fn with_todo_store(mut self, store: Arc<dyn TodoStore>) -> Self {
        self.todos = Some(store);
        self
    }

    /// Serve on an already bound listener; `bind_addr` is then ignored.
    #[must_use]
    pub fn with_listener(mut self, listener: TcpListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
