//! Domain primitives, ports, and the todo form controller.
//!
//! Purpose: define the strongly typed entities shared by the HTTP adapter and
//! the terminal client, plus the ports those adapters implement. Nothing in
//! here knows about HTTP or sessions.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - User / UserId: authenticated identity.
//! - CredentialRecord / LoginCredentials / authenticate: the auth gate.
//! - Todo / TodoId / NewTodo / TodoTitle: todo items and the title rule.
//! - TodoFormController: form and list state kept in sync with a store.

pub mod auth;
pub mod error;
pub mod ports;
pub mod todo;
pub mod todo_form;
pub mod user;

pub use self::auth::{
    CredentialRecord, FIXTURE_EMAIL, FIXTURE_PASSWORD, FIXTURE_USER_ID, FIXTURE_USER_NAME,
    LoginCredentials, authenticate,
};
pub use self::error::{Error, ErrorCode};
pub use self::todo::{
    INVALID_TITLE, NewTodo, TITLE_REQUIRED, Todo, TodoId, TodoTitle, TodoTitleError,
};
pub use self::todo_form::{
    CachePolicy, FieldError, FormErrors, FormState, SubmissionState, SubmitOutcome, SubmittedForm,
    TodoFormController,
};
pub use self::user::{User, UserId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("login required"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
