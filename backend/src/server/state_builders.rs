//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{StaticCredentialVerifier, TodoStore};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryTodoStore;

use super::ServerConfig;

/// Wire the configured credential record and todo store into handler state.
///
/// Falls back to an empty [`InMemoryTodoStore`] when no store was supplied.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let verifier = Arc::new(StaticCredentialVerifier::new(config.credentials.clone()));
    let todos: Arc<dyn TodoStore> = config
        .todos
        .clone()
        .unwrap_or_else(|| Arc::new(InMemoryTodoStore::default()));
    web::Data::new(HttpState::new(verifier, todos))
}
