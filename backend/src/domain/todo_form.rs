//! Todo form and list controller.
//!
//! The controller owns the state a todo screen renders: the title input, its
//! validation error, and a cached mirror of the store's todo list. Every
//! mutation goes to the [`TodoStore`] first; the cache is then reconciled
//! according to the [`CachePolicy`] picked at construction.
//!
//! Operations take `&mut self`, so one controller runs one operation at a
//! time. Dropping an operation future before it completes abandons it: no
//! state is written after the interrupted store call.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{TodoStore, TodoStoreError};
use super::{NewTodo, Todo, TodoId, TodoTitle, TodoTitleError};

/// Validation message(s) attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A single message.
    Message(String),
    /// Several messages, rendered joined with `", "`.
    Messages(Vec<String>),
}

impl FieldError {
    /// The first message, used when only one line fits.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message.as_str()),
            Self::Messages(messages) => messages.first().map(String::as_str),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Messages(messages) => f.write_str(&messages.join(", ")),
        }
    }
}

impl From<TodoTitleError> for FieldError {
    fn from(error: TodoTitleError) -> Self {
        Self::Message(error.to_string())
    }
}

/// Per-field validation errors of the todo form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    /// Error shown under the title input; `None` when the field is clean.
    pub title: Option<FieldError>,
}

/// Local, ephemeral state of the todo form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Current content of the title input.
    pub title: String,
    /// Validation errors per field.
    pub errors: FormErrors,
}

/// Field values captured when the form is submitted.
///
/// # Examples
/// ```
/// use backend::domain::SubmittedForm;
///
/// let form = SubmittedForm::from_fields([("title", "milk"), ("title", "ignored")]);
/// assert_eq!(form.title(), Some("milk"));
/// assert_eq!(SubmittedForm::default().title(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedForm {
    title: Option<String>,
}

impl SubmittedForm {
    /// Form data carrying a title field.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Collect form data from name/value pairs; the first `title` wins.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let title = fields
            .into_iter()
            .find(|(name, _)| name.as_ref() == "title")
            .map(|(_, value)| value.into());
        Self { title }
    }

    /// Submitted title, if the field was present.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Whether a submission is currently awaiting the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// No submission in flight.
    #[default]
    Idle,
    /// A submission is waiting on `add` or the follow-up reconciliation.
    Submitting,
}

/// How the cache is reconciled after a successful remove or toggle.
///
/// A successful submit always replaces the cache with a full `list`, so
/// todos added by other clients show up. Remove and toggle always patch the
/// cache first; the policy decides whether a `list` follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Patch, then replace the cache with a full `list`.
    #[default]
    Refetch,
    /// Patch only: `remove` filters, `toggle` replaces the entry.
    PatchLocally,
}

impl std::str::FromStr for CachePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "refetch" => Ok(Self::Refetch),
            "patch" | "patch-locally" => Ok(Self::PatchLocally),
            other => Err(format!(
                "unknown cache policy '{other}'; expected refetch|patch"
            )),
        }
    }
}

/// Result of [`TodoFormController::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The store created this todo; the form has been reset.
    Added(Todo),
    /// Validation failed; the error is on the form and the store was not called.
    Invalid(TodoTitleError),
}

/// State holder synchronising a todo screen with a [`TodoStore`].
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use backend::domain::{CachePolicy, SubmittedForm, TodoFormController};
/// use backend::outbound::memory::InMemoryTodoStore;
///
/// # async fn demo() -> Result<(), backend::domain::ports::TodoStoreError> {
/// let mut controller =
///     TodoFormController::new(Arc::new(InMemoryTodoStore::default()), CachePolicy::Refetch);
/// controller.initialize().await?;
/// controller.change_title("milk");
/// controller.submit(&SubmittedForm::with_title("milk")).await?;
/// assert_eq!(controller.todos().len(), 1);
/// assert!(controller.form().title.is_empty());
/// # Ok(())
/// # }
/// ```
pub struct TodoFormController<S: ?Sized> {
    store: Arc<S>,
    policy: CachePolicy,
    form: FormState,
    todos: Vec<Todo>,
    submission: SubmissionState,
}

impl<S: ?Sized> TodoFormController<S> {
    /// Create a controller with an empty form and an empty cache.
    pub fn new(store: Arc<S>, policy: CachePolicy) -> Self {
        Self {
            store,
            policy,
            form: FormState::default(),
            todos: Vec::new(),
            submission: SubmissionState::Idle,
        }
    }

    /// Current form state.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Cached todos in store order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Cache reconciliation policy.
    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Submission state.
    ///
    /// Stays [`SubmissionState::Submitting`] if a submit future was dropped
    /// mid-flight; the next submit overwrites it.
    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// Update the title input and clear its error.
    pub fn change_title(&mut self, value: impl Into<String>) {
        self.form.title = value.into();
        self.form.errors.title = None;
    }
}

impl<S> TodoFormController<S>
where
    S: TodoStore + ?Sized,
{
    /// Populate the cache from the store.
    ///
    /// # Errors
    /// Returns the store error; the cache is left empty in that case.
    pub async fn initialize(&mut self) -> Result<(), TodoStoreError> {
        match self.store.list_todos().await {
            Ok(todos) => {
                debug!(count = todos.len(), "todo cache initialised");
                self.todos = todos;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "initial todo fetch failed");
                self.todos.clear();
                Err(error)
            }
        }
    }

    /// Replace the cache with the store's full list.
    ///
    /// # Errors
    /// Returns the store error and leaves the cache untouched.
    pub async fn refresh(&mut self) -> Result<(), TodoStoreError> {
        self.todos = self.store.list_todos().await?;
        Ok(())
    }

    /// Validate the submitted form and, when valid, add the todo.
    ///
    /// The `add` call completes before the full list is fetched, and the
    /// list is fetched before the form resets, whatever the cache policy.
    ///
    /// # Errors
    /// Store failures propagate; the form keeps its input and the cache keeps
    /// whatever state it reached.
    pub async fn submit(
        &mut self,
        submitted: &SubmittedForm,
    ) -> Result<SubmitOutcome, TodoStoreError> {
        let title = match TodoTitle::parse(submitted.title()) {
            Ok(title) => title,
            Err(error) => {
                debug!(%error, "todo form rejected");
                self.form.errors.title = Some(FieldError::from(error));
                return Ok(SubmitOutcome::Invalid(error));
            }
        };

        self.submission = SubmissionState::Submitting;
        let result = self.add_and_refetch(NewTodo::from(title)).await;
        self.submission = SubmissionState::Idle;

        let added = result?;
        self.form = FormState::default();
        Ok(SubmitOutcome::Added(added))
    }

    async fn add_and_refetch(&mut self, new_todo: NewTodo) -> Result<Todo, TodoStoreError> {
        let added = self.store.add_todo(&new_todo).await?;
        debug!(id = %added.id, "todo added");
        self.refresh().await?;
        Ok(added)
    }

    /// Remove a todo from the store, then from the cache.
    ///
    /// # Errors
    /// A failed `remove` leaves the cache as it was. A failed follow-up
    /// `list` propagates with the removal already applied to the cache.
    pub async fn remove(&mut self, id: TodoId) -> Result<(), TodoStoreError> {
        self.store.remove_todo(id).await?;
        debug!(%id, "todo removed");
        self.todos.retain(|todo| todo.id != id);
        self.reconcile().await
    }

    /// Flip the completion flag of a cached todo.
    ///
    /// Returns `Ok(None)` without calling the store when `id` is not cached.
    ///
    /// # Errors
    /// A failed `update` leaves the cache as it was. A failed follow-up
    /// `list` propagates with the flipped entry already in the cache.
    pub async fn toggle(&mut self, id: TodoId) -> Result<Option<Todo>, TodoStoreError> {
        let Some(updated) = self
            .todos
            .iter()
            .find(|todo| todo.id == id)
            .map(Todo::toggled)
        else {
            return Ok(None);
        };

        self.store.update_todo(&updated).await?;
        debug!(%id, completed = updated.is_completed, "todo toggled");
        if let Some(slot) = self.todos.iter_mut().find(|todo| todo.id == id) {
            *slot = updated.clone();
        }
        self.reconcile().await?;
        Ok(Some(updated))
    }

    async fn reconcile(&mut self) -> Result<(), TodoStoreError> {
        match self.policy {
            CachePolicy::Refetch => self.refresh().await,
            CachePolicy::PatchLocally => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "todo_form_tests.rs"]
mod tests;
