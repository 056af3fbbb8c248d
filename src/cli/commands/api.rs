use crate::userdeck::config::{API_URL_ENV, DEFAULT_API_BASE_URL};
use clap::{Arg, Command};

pub const ARG_API_URL: &str = "api-url";

pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_API_URL)
            .short('u')
            .long("api-url")
            .help("Base URL of the users API")
            .env(API_URL_ENV)
            .global(true)
            .default_value(DEFAULT_API_BASE_URL),
    )
}
