//! Driven port for the authoritative todo collection.
//!
//! The store owns identifiers and is the source of truth; callers only ever
//! hold mirrors of its contents. Four verbs, nothing else.

use async_trait::async_trait;

use crate::domain::{NewTodo, Todo, TodoId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by todo store adapters.
    pub enum TodoStoreError {
        /// The store could not be reached or the exchange failed mid-way.
        Transport { message: String } =>
            "todo store transport failed: {message}",
        /// The store refused the request.
        Rejected { status: u16, message: String } =>
            "todo store rejected request ({status}): {message}",
        /// The store answered with a payload that could not be decoded.
        Decode { message: String } =>
            "todo store returned an invalid payload: {message}",
        /// An update targeted an identifier the store does not hold.
        NotFound { id: i64 } =>
            "todo {id} does not exist",
        /// The store has no identifier left to assign.
        IdsExhausted =>
            "todo store has no identifiers left",
    }
}

/// CRUD contract of the external todo store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Full list in store order.
    async fn list_todos(&self) -> Result<Vec<Todo>, TodoStoreError>;

    /// Create a todo; the store assigns the id and starts it incomplete.
    async fn add_todo(&self, todo: &NewTodo) -> Result<Todo, TodoStoreError>;

    /// Delete by id. Removing an unknown id succeeds without effect.
    async fn remove_todo(&self, id: TodoId) -> Result<(), TodoStoreError>;

    /// Replace the todo carrying `todo.id` and return the stored record.
    ///
    /// Fails with [`TodoStoreError::NotFound`] for an unknown id.
    async fn update_todo(&self, todo: &Todo) -> Result<Todo, TodoStoreError>;
}
