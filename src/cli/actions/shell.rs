//! Interactive session: each input line edits the draft, submits it, or
//! reloads the list, and the current view is printed after every change.

use crate::cli::globals::GlobalArgs;
use crate::userdeck::{form, state::ViewState, DraftField, UiError, UserManager, UsersApi};
use anyhow::Result;
use std::{io::Write, process::ExitCode};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  name <value>    set the name field
  email <value>   set the email field
  submit          create the user from the form
  reload          fetch the user list again
  show            print the current view
  help            show this help
  quit            leave the session
";

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Edit(DraftField, String),
    Submit,
    Reload,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match word.to_lowercase().as_str() {
            "" => Self::Empty,
            "name" => Self::Edit(DraftField::Name, rest.trim().to_string()),
            // Email inputs drop surrounding whitespace.
            "email" => Self::Edit(DraftField::Email, rest.trim().to_string()),
            "submit" => Self::Submit,
            "reload" => Self::Reload,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Run the interactive session on stdin/stdout.
/// # Errors
/// Returns an error if the HTTP client cannot be built or stdin/stdout fail.
pub async fn execute(args: Args) -> Result<ExitCode> {
    let api = args.globals.users_api()?;
    let reader = BufReader::new(tokio::io::stdin());
    let error = run(api, reader, &mut std::io::stdout()).await?;

    Ok(super::exit_code(error))
}

/// Drives a [`UserManager`] from input lines until `quit` or end of input.
/// Returns the error shown when the session ends, if any.
pub(crate) async fn run<A, R, W>(api: A, reader: R, out: &mut W) -> Result<Option<UiError>>
where
    A: UsersApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut manager = UserManager::mount(api).await;
    write!(out, "{}", manager.view())?;

    let mut lines = reader.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = Command::parse(&line);
        debug!("shell command: {:?}", command);

        match command {
            Command::Quit => break,
            Command::Empty => {}
            Command::Help => write!(out, "{HELP}")?,
            Command::Unknown(word) => {
                writeln!(out, "Unknown command: {word} (type `help`)")?;
            }
            Command::Show => write!(out, "{}", manager.view())?,
            Command::Reload => {
                manager.load_users().await;
                write!(out, "{}", manager.view())?;
            }
            Command::Edit(field, value) => {
                if form_visible(&manager) {
                    manager.edit(field, value);
                    write!(out, "{}", manager.view())?;
                } else {
                    writeln!(out, "Form unavailable; use `reload`.")?;
                }
            }
            Command::Submit => {
                if !form_visible(&manager) {
                    writeln!(out, "Form unavailable; use `reload`.")?;
                } else if let Err(err) = form::validate(manager.draft()) {
                    writeln!(out, "Invalid input: {err}")?;
                } else {
                    manager.submit_user().await;
                    write!(out, "{}", manager.view())?;
                }
            }
        }
    }

    out.flush()?;
    Ok(manager.error())
}

fn form_visible<A: UsersApi>(manager: &UserManager<A>) -> bool {
    matches!(manager.view(), ViewState::Ready { .. })
}
