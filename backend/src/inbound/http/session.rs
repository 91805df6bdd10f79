//! Login state carried in the session cookie.
//!
//! Handlers extract [`SessionContext`] instead of the raw Actix session. The
//! only state stored is the id of the user who passed the login gate.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, UserId};

const LOGGED_IN_USER: &str = "uid";

/// Session wrapper exposing login-state operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Mark `user_id` as logged in, rotating the session identifier first.
    ///
    /// # Errors
    /// Returns an internal error when the session cannot be serialised.
    pub fn persist_user(&self, user_id: UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(LOGGED_IN_USER, user_id.get())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Logged-in user, if any. An undecodable entry counts as logged out.
    pub fn user_id(&self) -> Option<UserId> {
        self.0
            .get::<i64>(LOGGED_IN_USER)
            .unwrap_or_else(|error| {
                warn!(%error, "discarding malformed session entry");
                None
            })
            .map(UserId::new)
    }

    /// Logged-in user, or `401 Unauthorized`.
    ///
    /// # Errors
    /// [`crate::domain::ErrorCode::Unauthorized`] when nobody is logged in.
    pub fn require_user_id(&self) -> Result<UserId, Error> {
        self.user_id()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Log out; the response carries a removal cookie.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let session = Session::from_request(req, payload);
        Box::pin(async move { Ok(Self(session.await?)) })
    }
}

#[cfg(test)]
mod tests {
    use actix_http::Request;
    use actix_web::body::BoxBody;
    use actix_web::cookie::Cookie;
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::test::{self as actix_test, TestRequest};
    use actix_web::{App, HttpResponse, web};
    use rstest::rstest;

    use super::*;
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};

    async fn app()
    -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
        actix_test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .route(
                    "/login/{id}",
                    web::post().to(|session: SessionContext, id: web::Path<i64>| async move {
                        session.persist_user(UserId::new(id.into_inner()))?;
                        Ok::<_, Error>(HttpResponse::Ok().finish())
                    }),
                )
                .route(
                    "/whoami",
                    web::get().to(|session: SessionContext| async move {
                        let id = session.require_user_id()?;
                        Ok::<_, Error>(HttpResponse::Ok().body(id.to_string()))
                    }),
                )
                .route(
                    "/logout",
                    web::post().to(|session: SessionContext| async move {
                        session.purge();
                        HttpResponse::NoContent().finish()
                    }),
                )
                .route(
                    "/corrupt",
                    web::post().to(|session: Session| async move {
                        match session.insert(LOGGED_IN_USER, "one") {
                            Ok(()) => HttpResponse::Ok().finish(),
                            Err(_) => HttpResponse::InternalServerError().finish(),
                        }
                    }),
                ),
        )
        .await
    }

    async fn whoami<S>(app: &S, cookie: Option<Cookie<'static>>) -> ServiceResponse<BoxBody>
    where
        S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
    {
        let mut request = TestRequest::get().uri("/whoami");
        if let Some(cookie) = cookie {
            request = request.cookie(cookie);
        }
        actix_test::call_service(app, request.to_request()).await
    }

    #[actix_web::test]
    async fn logged_in_user_is_read_back() {
        let app = app().await;
        let login_response =
            actix_test::call_service(&app, TestRequest::post().uri("/login/1").to_request())
                .await;
        assert_eq!(login_response.status(), StatusCode::OK);

        let res = whoami(&app, session_cookie(&login_response)).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(actix_test::read_body(res).await, "1");
    }

    #[rstest]
    #[case::no_cookie(None)]
    #[case::malformed_entry(Some("/corrupt"))]
    #[actix_web::test]
    async fn anonymous_requests_are_unauthorised(#[case] setup: Option<&str>) {
        let app = app().await;
        let cookie = match setup {
            Some(uri) => {
                let res =
                    actix_test::call_service(&app, TestRequest::post().uri(uri).to_request()).await;
                session_cookie(&res)
            }
            None => None,
        };

        let res = whoami(&app, cookie).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn purge_sends_a_removal_cookie() {
        let app = app().await;
        let login_response =
            actix_test::call_service(&app, TestRequest::post().uri("/login/1").to_request())
                .await;
        let cookie = session_cookie(&login_response).expect("login sets a cookie");

        let logout = actix_test::call_service(
            &app,
            TestRequest::post().uri("/logout").cookie(cookie).to_request(),
        )
        .await;

        assert_eq!(logout.status(), StatusCode::NO_CONTENT);
        let removal = session_cookie(&logout).expect("removal cookie");
        assert_eq!(removal.value(), "");
    }
}
