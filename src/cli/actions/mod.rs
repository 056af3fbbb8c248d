pub mod add;
pub mod list;
pub mod shell;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use crate::userdeck::UiError;
use std::process::ExitCode;

#[derive(Debug)]
pub enum Action {
    List(list::Args),
    Add(add::Args),
    Shell(shell::Args),
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute().await`.
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<ExitCode> {
        run::execute(self).await
    }
}

/// Non-zero exit status when the manager ends up showing an error.
fn exit_code(error: Option<UiError>) -> ExitCode {
    if error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
