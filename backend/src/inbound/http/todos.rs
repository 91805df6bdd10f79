//! Todo collection handlers.
//!
//! ```text
//! GET    /api/v1/todos
//! POST   /api/v1/todos        {"title":"milk"}
//! PUT    /api/v1/todos/{id}   {"id":1,"title":"milk","isCompleted":true}
//! DELETE /api/v1/todos/{id}
//! ```
//!
//! Every route requires a logged-in session.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, NewTodo, Todo, TodoId, TodoTitle, TodoTitleError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/v1/todos`.
///
/// `title` is optional on the wire so a missing field reports the same
/// message the form shows.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateTodoRequest {
    #[schema(example = "milk")]
    pub title: Option<String>,
}

fn title_error(err: TodoTitleError) -> Error {
    let code = match err {
        TodoTitleError::Blank => "blank_title",
        TodoTitleError::Missing => "missing_title",
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": "title", "code": code }))
}

/// List todos in store order.
#[utoipa::path(
    get,
    path = "/api/v1/todos",
    responses(
        (status = 200, description = "Todos", body = [Todo]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("/todos")]
pub async fn list_todos(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Todo>>> {
    session.require_user_id()?;
    let todos = state.todos.list_todos().await?;
    Ok(web::Json(todos))
}

/// Create a todo; the store assigns its id.
#[utoipa::path(
    post,
    path = "/api/v1/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Created", body = Todo),
        (status = 400, description = "Blank or missing title", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["todos"],
    operation_id = "addTodo"
)]
#[post("/todos")]
pub async fn add_todo(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateTodoRequest>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    let title = TodoTitle::parse(payload.title.as_deref()).map_err(title_error)?;
    let created = state.todos.add_todo(&NewTodo::from(title)).await?;
    debug!(id = %created.id, "todo created");
    Ok(HttpResponse::Created().json(created))
}

/// Replace a todo.
#[utoipa::path(
    put,
    path = "/api/v1/todos/{id}",
    params(("id" = i64, Path, description = "Todo identifier")),
    request_body = Todo,
    responses(
        (status = 200, description = "Updated", body = Todo),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Unknown todo", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[put("/todos/{id}")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<TodoId>,
    payload: web::Json<Todo>,
) -> ApiResult<web::Json<Todo>> {
    session.require_user_id()?;
    let id = path.into_inner();
    let todo = payload.into_inner();
    if todo.id != id {
        return Err(Error::invalid_request("path id does not match body id")
            .with_details(json!({ "field": "id", "path": id, "body": todo.id })));
    }
    TodoTitle::new(todo.title.as_str()).map_err(title_error)?;
    let updated = state.todos.update_todo(&todo).await?;
    Ok(web::Json(updated))
}

/// Delete a todo. Unknown ids succeed without effect.
#[utoipa::path(
    delete,
    path = "/api/v1/todos/{id}",
    params(("id" = i64, Path, description = "Todo identifier")),
    responses(
        (status = 204, description = "Removed"),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["todos"],
    operation_id = "removeTodo"
)]
#[delete("/todos/{id}")]
pub async fn remove_todo(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<TodoId>,
) -> ApiResult<HttpResponse> {
    session.require_user_id()?;
    state.todos.remove_todo(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
