use crate::cli::{
    actions::{add, list, shell, Action},
    commands::{self, api::ARG_API_URL},
    globals::GlobalArgs,
};
use crate::userdeck::AppConfig;
use anyhow::{anyhow, Context, Result};

/// # Errors
/// Returns an error if the API URL is invalid or required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_url = matches
        .get_one::<String>(ARG_API_URL)
        .cloned()
        .unwrap_or_default();
    let config = AppConfig::new(&api_url).context("invalid API base URL")?;
    let globals = GlobalArgs::new(config);

    match matches.subcommand() {
        None | Some((commands::CMD_LIST, _)) => Ok(Action::List(list::Args { globals })),
        Some((commands::CMD_ADD, sub_m)) => {
            let name = sub_m
                .get_one::<String>(commands::ARG_NAME)
                .cloned()
                .context("missing required argument: --name")?;
            let email = sub_m
                .get_one::<String>(commands::ARG_EMAIL)
                .cloned()
                .context("missing required argument: --email")?;

            Ok(Action::Add(add::Args {
                globals,
                name,
                email,
            }))
        }
        Some((commands::CMD_SHELL, _)) => Ok(Action::Shell(shell::Args { globals })),
        Some((other, _)) => Err(anyhow!("unknown command: {other}")),
    }
}
