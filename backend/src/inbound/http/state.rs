//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CredentialVerifier, TodoStore};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub verifier: Arc<dyn CredentialVerifier>,
    pub todos: Arc<dyn TodoStore>,
}

impl HttpState {
    /// Construct state from its ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::StaticCredentialVerifier;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryTodoStore;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(StaticCredentialVerifier::default()),
    ///     Arc::new(InMemoryTodoStore::default()),
    /// );
    /// let _todos = state.todos.clone();
    /// ```
    pub fn new(verifier: Arc<dyn CredentialVerifier>, todos: Arc<dyn TodoStore>) -> Self {
        Self { verifier, todos }
    }
}
