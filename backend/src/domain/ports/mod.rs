//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_verifier;
mod todo_store;

#[cfg(test)]
pub use credential_verifier::MockCredentialVerifier;
pub use credential_verifier::{CredentialVerifier, StaticCredentialVerifier};
#[cfg(test)]
pub use todo_store::MockTodoStore;
pub use todo_store::{TodoStore, TodoStoreError};
