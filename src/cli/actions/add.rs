use crate::cli::globals::GlobalArgs;
use crate::userdeck::{form, state::ViewState, UiError, UserDraft, UserManager, UsersApi};
use anyhow::{Context, Result};
use std::{io::Write, process::ExitCode};
use tracing::warn;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub name: String,
    pub email: String,
}

/// Validate the draft, load the list, submit, and print the refreshed view.
/// # Errors
/// Returns an error if the draft violates the form constraints, the HTTP
/// client cannot be built, or stdout is closed.
pub async fn execute(args: Args) -> Result<ExitCode> {
    let draft = UserDraft::new(args.name, args.email.trim());
    form::validate(&draft).context("invalid user")?;

    let api = args.globals.users_api()?;
    let error = run(api, draft, &mut std::io::stdout()).await?;

    Ok(super::exit_code(error))
}

/// Mounts the manager and submits `draft` through the form. Nothing is sent
/// when the initial fetch fails, since the form is only shown in the ready view.
pub(crate) async fn run<A: UsersApi, W: Write>(
    api: A,
    draft: UserDraft,
    out: &mut W,
) -> Result<Option<UiError>> {
    let mut manager = UserManager::mount(api).await;

    if matches!(manager.view(), ViewState::Ready { .. }) {
        manager.set_name(draft.name);
        manager.set_email(draft.email);
        manager.submit_user().await;
    } else {
        warn!("form unavailable, user not submitted");
    }

    write!(out, "{}", manager.view())?;
    out.flush()?;

    Ok(manager.error())
}
