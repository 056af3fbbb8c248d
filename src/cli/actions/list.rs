use crate::cli::globals::GlobalArgs;
use crate::userdeck::{UiError, UserManager, UsersApi};
use anyhow::Result;
use std::{io::Write, process::ExitCode};
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// Fetch the users once and print the resulting view.
/// # Errors
/// Returns an error if the HTTP client cannot be built or stdout is closed.
pub async fn execute(args: Args) -> Result<ExitCode> {
    debug!("listing users from {}", args.globals.config.api_base_url);
    let api = args.globals.users_api()?;
    let error = run(api, &mut std::io::stdout()).await?;

    Ok(super::exit_code(error))
}

/// Mounts the manager, writes its view and returns the error it shows, if any.
pub(crate) async fn run<A: UsersApi, W: Write>(
    api: A,
    out: &mut W,
) -> Result<Option<UiError>> {
    let manager = UserManager::mount(api).await;
    write!(out, "{}", manager.view())?;
    out.flush()?;

    Ok(manager.error())
}
