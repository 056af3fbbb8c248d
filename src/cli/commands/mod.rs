pub mod api;
pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const CMD_LIST: &str = "list";
pub const CMD_ADD: &str = "add";
pub const CMD_SHELL: &str = "shell";

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";

fn add_command() -> Command {
    Command::new(CMD_ADD)
        .about("Create a user, then show the refreshed list")
        .arg(
            Arg::new(ARG_NAME)
                .short('n')
                .long("name")
                .help("Name of the new user")
                .required(true),
        )
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long("email")
                .help("Email address of the new user")
                .required(true),
        )
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("userdeck")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand(Command::new(CMD_LIST).about("Fetch and show all users (default)"))
        .subcommand(add_command())
        .subcommand(
            Command::new(CMD_SHELL).about("Interactive form: edit the draft, submit, reload"),
        );

    let command = api::with_args(command);
    logging::with_args(command)
}
