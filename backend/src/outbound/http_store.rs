//! Reqwest-backed todo store talking to the `todo-backend` REST API.
//!
//! This adapter owns transport details only: URL building, the session
//! cookie, timeouts, HTTP error mapping, and JSON decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::ports::{TodoStore, TodoStoreError};
use crate::domain::{Error, LoginCredentials, NewTodo, Todo, TodoId, User};
use crate::inbound::http::auth::LoginRequest;

const API_PREFIX: &str = "api/v1/";

/// Todo store that forwards every verb to a remote server.
///
/// The client keeps cookies, so [`HttpTodoStore::login`] must succeed before
/// the store verbs are authorised.
pub struct HttpTodoStore {
    client: Client,
    api: Url,
}

impl HttpTodoStore {
    /// Build an adapter for the server rooted at `base` with a per-request
    /// timeout.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            client,
            api: api_root(base),
        })
    }

    /// Authenticate and keep the session cookie for later calls.
    ///
    /// # Errors
    /// [`TodoStoreError::Rejected`] with status 401 on a credential mismatch;
    /// transport and decode failures otherwise.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User, TodoStoreError> {
        let body = LoginRequest {
            email: credentials.email().to_owned(),
            password: credentials.password().to_owned(),
        };
        let request = self.client.post(self.endpoint("login")?).json(&body);
        let user: User = decode(send(request).await?)?;
        debug!(user_id = %user.id(), "logged in");
        Ok(user)
    }

    fn endpoint(&self, path: &str) -> Result<Url, TodoStoreError> {
        self.api
            .join(path)
            .map_err(|error| TodoStoreError::transport(format!("invalid endpoint {path}: {error}")))
    }

    fn todo_endpoint(&self, id: TodoId) -> Result<Url, TodoStoreError> {
        self.endpoint(&format!("todos/{id}"))
    }
}

fn api_root(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(API_PREFIX).unwrap_or(base)
}

async fn send(request: RequestBuilder) -> Result<Vec<u8>, TodoStoreError> {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    Ok(body.to_vec())
}

fn decode<T: DeserializeOwned>(body: Vec<u8>) -> Result<T, TodoStoreError> {
    serde_json::from_slice(&body).map_err(|error| TodoStoreError::decode(error.to_string()))
}

fn map_transport_error(error: reqwest::Error) -> TodoStoreError {
    if error.is_timeout() {
        TodoStoreError::transport(format!("timed out: {error}"))
    } else {
        TodoStoreError::transport(error.to_string())
    }
}

/// Prefer the server's error message; fall back to a compact body preview.
fn map_status_error(status: StatusCode, body: &[u8]) -> TodoStoreError {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let message = match serde_json::from_slice::<Error>(body) {
        Ok(error) => error.message().to_owned(),
        Err(_) => String::from_utf8_lossy(body)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .take(PREVIEW_CHAR_LIMIT)
            .collect(),
    };
    let message = if message.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_owned()
    } else {
        message
    };
    TodoStoreError::rejected(status.as_u16(), message)
}

#[async_trait]
impl TodoStore for HttpTodoStore {
    async fn list_todos(&self) -> Result<Vec<Todo>, TodoStoreError> {
        decode(send(self.client.get(self.endpoint("todos")?)).await?)
    }

    async fn add_todo(&self, todo: &NewTodo) -> Result<Todo, TodoStoreError> {
        decode(send(self.client.post(self.endpoint("todos")?).json(todo)).await?)
    }

    async fn remove_todo(&self, id: TodoId) -> Result<(), TodoStoreError> {
        send(self.client.delete(self.todo_endpoint(id)?)).await?;
        Ok(())
    }

    async fn update_todo(&self, todo: &Todo) -> Result<Todo, TodoStoreError> {
        let request = self.client.put(self.todo_endpoint(todo.id)?).json(todo);
        match send(request).await {
            Ok(body) => decode(body),
            Err(TodoStoreError::Rejected { status: 404, .. }) => {
                Err(TodoStoreError::not_found(todo.id.get()))
            }
            Err(other) => Err(other),
        }
    }
}
