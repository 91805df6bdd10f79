//! Outbound adapters implementing the todo store port.
//!
//! - **memory**: process-local store used by the server.
//! - **http_store**: reqwest client for a remote server, used by `todo-cli`.
//!
//! Adapters are thin translators; they contain no business logic.

pub mod http_store;
pub mod memory;
