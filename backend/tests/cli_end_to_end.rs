//! End-to-end run of the terminal client stack against a live server bound
//! to an ephemeral port.

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use backend::domain::ports::{TodoStore, TodoStoreError};
use backend::domain::{
    CachePolicy, FIXTURE_EMAIL, FIXTURE_PASSWORD, LoginCredentials, SubmittedForm, Todo, TodoId,
    TodoFormController,
};
use backend::inbound::cli::run_session;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::session_config::SessionSettings;
use backend::outbound::http_store::HttpTodoStore;
use backend::server::{ServerConfig, create_server};
use rstest::rstest;
use url::Url;

fn start_server() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let session = SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    };
    let config = ServerConfig::new(session, addr).with_listener(listener);
    let server = create_server(web::Data::new(HealthState::new()), config).expect("server");
    actix_web::rt::spawn(server);
    Url::parse(&format!("http://{addr}/")).expect("base url")
}

async fn logged_in_store(base: Url) -> HttpTodoStore {
    let store = HttpTodoStore::new(base, Duration::from_secs(5)).expect("client");
    store
        .login(&LoginCredentials::new(FIXTURE_EMAIL, FIXTURE_PASSWORD))
        .await
        .expect("fixture login");
    store
}

#[actix_web::test]
async fn store_verbs_require_login() {
    let store = HttpTodoStore::new(start_server(), Duration::from_secs(5)).expect("client");

    let err = store.list_todos().await.expect_err("no session yet");
    assert!(matches!(err, TodoStoreError::Rejected { status: 401, .. }));

    let err = store
        .login(&LoginCredentials::new(FIXTURE_EMAIL, "wrong"))
        .await
        .expect_err("bad password");
    assert_eq!(err, TodoStoreError::rejected(401_u16, "invalid credentials"));
}

#[rstest]
#[case(CachePolicy::Refetch)]
#[case(CachePolicy::PatchLocally)]
#[actix_web::test]
async fn controller_mirrors_the_server(#[case] policy: CachePolicy) {
    let store = Arc::new(logged_in_store(start_server()).await);
    let mut controller = TodoFormController::new(Arc::clone(&store), policy);
    controller.initialize().await.expect("initial list");

    for title in ["milk", "eggs"] {
        controller.change_title(title);
        controller
            .submit(&SubmittedForm::with_title(title))
            .await
            .expect("submit");
    }
    controller.toggle(TodoId::new(2)).await.expect("toggle eggs");
    controller.toggle(TodoId::new(1)).await.expect("toggle milk");
    assert_eq!(
        controller.todos(),
        &[
            Todo::new(TodoId::new(1), "milk", true),
            Todo::new(TodoId::new(2), "eggs", true),
        ]
    );

    controller.remove(TodoId::new(2)).await.expect("remove eggs");
    assert_eq!(controller.todos(), &[Todo::new(TodoId::new(1), "milk", true)]);
    assert_eq!(
        store.list_todos().await.expect("server list"),
        controller.todos()
    );
}

#[actix_web::test]
async fn unknown_ids_surface_as_not_found() {
    let store = logged_in_store(start_server()).await;

    let err = store
        .update_todo(&Todo::new(TodoId::new(42), "ghost", true))
        .await
        .expect_err("nothing to update");

    assert_eq!(err, TodoStoreError::not_found(42_i64));
}

#[actix_web::test]
async fn line_session_drives_the_remote_list() {
    let store = Arc::new(logged_in_store(start_server()).await);
    let mut controller = TodoFormController::new(Arc::clone(&store), CachePolicy::Refetch);
    controller.initialize().await.expect("initial list");

    let mut output = Vec::new();
    run_session(
        &mut controller,
        "add bread\ntitle \nsubmit\ntoggle 1\nquit\n".as_bytes(),
        &mut output,
    )
    .await
    .expect("session I/O");

    let transcript = String::from_utf8(output).expect("utf-8");
    assert!(transcript.contains("  ! Title is required"), "{transcript}");
    assert_eq!(
        store.list_todos().await.expect("server list"),
        vec![Todo::new(TodoId::new(1), "bread", true)]
    );
}
