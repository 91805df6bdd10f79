//! Line-oriented terminal front end for the todo form controller.
//!
//! Reads one [`Command`] per line, applies it to a [`TodoFormController`],
//! and re-renders the form and the cached list after every command. Store
//! failures are printed and the session continues.

mod command;

pub use command::{Command, CommandParseError, HELP};

use std::fmt::Write as _;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::domain::ports::{TodoStore, TodoStoreError};
use crate::domain::{SubmitOutcome, SubmittedForm, TodoFormController};

const PROMPT: &str = "> ";

/// Render the form input, its error, and the cached list.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use backend::domain::{CachePolicy, TodoFormController};
/// use backend::inbound::cli::render;
/// use backend::outbound::memory::InMemoryTodoStore;
///
/// let controller =
///     TodoFormController::new(Arc::new(InMemoryTodoStore::default()), CachePolicy::Refetch);
/// assert_eq!(render(&controller), "title: \n(no todos)\n");
/// ```
pub fn render<S: ?Sized>(controller: &TodoFormController<S>) -> String {
    let mut out = String::new();
    let form = controller.form();
    let _ = writeln!(out, "title: {}", form.title);
    if let Some(error) = &form.errors.title {
        let _ = writeln!(out, "  ! {error}");
    }
    if controller.todos().is_empty() {
        out.push_str("(no todos)\n");
    }
    for todo in controller.todos() {
        let mark = if todo.is_completed { 'x' } else { ' ' };
        let _ = writeln!(out, "[{mark}] {:>3}  {}", todo.id, todo.title);
    }
    out
}

async fn apply<S>(
    controller: &mut TodoFormController<S>,
    command: Command,
) -> Result<(), TodoStoreError>
where
    S: TodoStore + ?Sized,
{
    match command {
        Command::Title(text) => controller.change_title(text),
        Command::Submit => {
            let submitted = SubmittedForm::with_title(controller.form().title.clone());
            submit(controller, &submitted).await?;
        }
        Command::Add(text) => {
            controller.change_title(text.clone());
            submit(controller, &SubmittedForm::with_title(text)).await?;
        }
        Command::Remove(id) => controller.remove(id).await?,
        Command::Toggle(id) => {
            if controller.toggle(id).await?.is_none() {
                debug!(%id, "toggle ignored; id not in the list");
            }
        }
        Command::List => controller.refresh().await?,
        Command::Help | Command::Quit => {}
    }
    Ok(())
}

async fn submit<S>(
    controller: &mut TodoFormController<S>,
    submitted: &SubmittedForm,
) -> Result<(), TodoStoreError>
where
    S: TodoStore + ?Sized,
{
    if let SubmitOutcome::Added(todo) = controller.submit(submitted).await? {
        debug!(id = %todo.id, "todo submitted");
    }
    Ok(())
}

/// Drive `controller` from `input` until `quit` or end of input.
///
/// The caller initialises the controller; this only applies commands.
///
/// # Errors
/// Only I/O failures on `input` or `output` end the session.
pub async fn run_session<S, R, W>(
    controller: &mut TodoFormController<S>,
    input: R,
    output: &mut W,
) -> std::io::Result<()>
where
    S: TodoStore + ?Sized,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output.write_all(render(controller).as_bytes()).await?;
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandParseError::Empty) => continue,
            Err(error) => {
                output.write_all(format!("{error}\n").as_bytes()).await?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => {
                output.write_all(format!("{HELP}\n").as_bytes()).await?;
                continue;
            }
            command => {
                if let Err(error) = apply(controller, command).await {
                    warn!(%error, "command failed");
                    output.write_all(format!("error: {error}\n").as_bytes()).await?;
                }
            }
        }
        output.write_all(render(controller).as_bytes()).await?;
    }
    output.flush().await
}
