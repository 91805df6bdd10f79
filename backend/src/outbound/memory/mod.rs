//! In-process todo store.
//!
//! Backs the HTTP server and local runs of the terminal client. Contents live
//! for the lifetime of the process.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ports::{TodoStore, TodoStoreError};
use crate::domain::{NewTodo, Todo, TodoId};

#[derive(Debug)]
struct State {
    todos: Vec<Todo>,
    /// `None` once the id space is used up.
    next_id: Option<i64>,
}

/// Todo store keeping items in insertion order behind a mutex.
///
/// Identifiers are assigned from a counter starting at 1 and are never
/// reused, even after removal.
#[derive(Debug)]
pub struct InMemoryTodoStore {
    state: Mutex<State>,
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::with_todos(Vec::new())
    }
}

impl InMemoryTodoStore {
    /// Seed the store; new ids continue after the largest seeded id.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos
            .iter()
            .map(|todo| todo.id.get())
            .max()
            .map_or(Some(1), |max| max.checked_add(1));
        Self {
            state: Mutex::new(State { todos, next_id }),
        }
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list_todos(&self) -> Result<Vec<Todo>, TodoStoreError> {
        Ok(self.state.lock().await.todos.clone())
    }

    async fn add_todo(&self, todo: &NewTodo) -> Result<Todo, TodoStoreError> {
        let mut state = self.state.lock().await;
        let id = state.next_id.ok_or_else(TodoStoreError::ids_exhausted)?;
        let created = Todo::new(TodoId::new(id), todo.title.clone(), false);
        state.next_id = id.checked_add(1);
        state.todos.push(created.clone());
        Ok(created)
    }

    async fn remove_todo(&self, id: TodoId) -> Result<(), TodoStoreError> {
        self.state.lock().await.todos.retain(|todo| todo.id != id);
        Ok(())
    }

    async fn update_todo(&self, todo: &Todo) -> Result<Todo, TodoStoreError> {
        let mut state = self.state.lock().await;
        let slot = state
            .todos
            .iter_mut()
            .find(|existing| existing.id == todo.id)
            .ok_or_else(|| TodoStoreError::not_found(todo.id.get()))?;
        *slot = todo.clone();
        Ok(slot.clone())
    }
}
