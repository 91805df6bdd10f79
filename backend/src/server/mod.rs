//! Application assembly and the HTTP server.
//!
//! [`build_app`] is shared by [`create_server`] and the integration tests, so
//! both exercise the same routing and middleware stack.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::time::Duration;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::auth::{login, logout};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::session_config::SessionSettings;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::todos::{add_todo, list_todos, remove_todo, update_todo};
use crate::middleware::Trace;

use state_builders::build_http_state;

/// Name of the cookie holding the login session.
pub const SESSION_COOKIE_NAME: &str = "session";

const SESSION_TTL_HOURS: i64 = 2;

/// Inputs cloned into every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    /// Probe flags shared with the bootstrap.
    pub health_state: web::Data<HealthState>,
    /// Ports used by the API handlers.
    pub http_state: web::Data<HttpState>,
    /// Session cookie settings.
    pub session: SessionSettings,
}

fn session_middleware(settings: SessionSettings) -> SessionMiddleware<CookieSessionStore> {
    let SessionSettings {
        key,
        cookie_secure,
        same_site,
    } = settings;
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(same_site)
        .cookie_content_security(CookieContentSecurity::Private)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::hours(SESSION_TTL_HOURS)),
        )
        .build()
}

/// Assemble the application.
///
/// Login, logout and the todo routes live under `/api/v1` behind the session
/// cookie; the probes stay outside it. Every response passes through
/// [`Trace`]. Debug builds also serve Swagger UI at `/docs`.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .wrap(session_middleware(deps.session))
        .service(login)
        .service(logout)
        .service(list_todos)
        .service(add_todo)
        .service(update_todo)
        .service(remove_todo);

    let app = App::new()
        .app_data(deps.health_state)
        .app_data(deps.http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the server described by `config` and flag it ready.
///
/// Uses the supplied listener when there is one, otherwise binds
/// `bind_addr`. The returned [`Server`] must be awaited to serve requests.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state: build_http_state(&config),
        session: config.session,
    };

    let http_server = HttpServer::new(move || build_app(deps.clone()));
    let http_server = match config.listener {
        Some(listener) => http_server.listen(listener)?,
        None => http_server.bind(config.bind_addr)?,
    };
    info!(addrs = ?http_server.addrs(), "todo backend listening");
    let server = http_server.run();

    health_state.mark_ready();
    Ok(server)
}
