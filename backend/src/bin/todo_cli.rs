//! Terminal client: logs in to a running `todo-backend`, then edits the todo
//! list one command per line.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::io::{BufReader, stdin, stdout};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use backend::domain::ports::TodoStoreError;
use backend::domain::{
    CachePolicy, FIXTURE_EMAIL, FIXTURE_PASSWORD, LoginCredentials, TodoFormController,
};
use backend::inbound::cli::{HELP, run_session};
use backend::outbound::http_store::HttpTodoStore;

#[derive(Debug, Parser)]
#[command(name = "todo-cli", about = "Edit the todo list of a running todo backend")]
struct Args {
    /// Root URL of the server.
    #[arg(long, env = "TODO_CLI_BASE_URL", default_value = "http://127.0.0.1:8080/")]
    base_url: Url,
    /// Login email.
    #[arg(long, env = "TODO_CLI_EMAIL", default_value = FIXTURE_EMAIL)]
    email: String,
    /// Login password.
    #[arg(
        long,
        env = "TODO_CLI_PASSWORD",
        default_value = FIXTURE_PASSWORD,
        hide_default_value = true
    )]
    password: String,
    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
    /// Whether remove and toggle also reload the list: `refetch` or `patch`.
    #[arg(long, default_value = "refetch")]
    policy: CachePolicy,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("login failed: {0}")]
    Login(#[source] TodoStoreError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

async fn run(args: Args) -> Result<(), CliError> {
    let store = HttpTodoStore::new(args.base_url, Duration::from_secs(args.timeout_secs))?;
    let user = store
        .login(&LoginCredentials::new(args.email, args.password))
        .await
        .map_err(CliError::Login)?;
    println!("signed in as {} <{}>", user.name(), user.email());
    println!("{HELP}");

    let mut controller = TodoFormController::new(Arc::new(store), args.policy);
    if let Err(error) = controller.initialize().await {
        warn!(%error, "starting with an empty list");
        eprintln!("could not load todos: {error}");
    }

    let mut out = stdout();
    run_session(&mut controller, BufReader::new(stdin()), &mut out).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("todo-cli: {error}");
            ExitCode::FAILURE
        }
    }
}
