//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] registers the login, todo, and health endpoints with the
//! session cookie security scheme. Swagger UI serves it in debug builds and
//! the `openapi-dump` binary prints it for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, NewTodo, Todo, User};
use crate::inbound::http::auth::LoginRequest;
use crate::inbound::http::todos::CreateTodoRequest;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Todo backend API",
        description = "Session-authenticated todo list with a single fixture login."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::add_todo,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::todos::remove_todo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Todo,
        NewTodo,
        Error,
        ErrorCode,
        LoginRequest,
        CreateTodoRequest
    )),
    tags(
        (name = "auth", description = "Login and logout"),
        (name = "todos", description = "The todo collection"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
