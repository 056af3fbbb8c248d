use crate::cli::actions::{add, list, shell, Action};
use anyhow::Result;
use std::process::ExitCode;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<ExitCode> {
    match action {
        Action::List(args) => list::execute(args).await,
        Action::Add(args) => add::execute(args).await,
        Action::Shell(args) => shell::execute(args).await,
    }
}
