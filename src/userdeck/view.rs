//! Text rendering of [`ViewState`]. Loading and error views replace everything
//! else; the ready view shows the form followed by one card per user.

use super::{
    state::ViewState,
    types::{User, UserDraft},
};
use std::fmt;

pub const TITLE: &str = "User Management";
pub const LOADING: &str = "Loading...";

const NAME_PLACEHOLDER: &str = "Name";
const EMAIL_PLACEHOLDER: &str = "Email";

impl fmt::Display for ViewState<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Loading => writeln!(formatter, "{LOADING}"),
            ViewState::Error(error) => writeln!(formatter, "Error: {error}"),
            ViewState::Ready { users, draft } => {
                writeln!(formatter, "{TITLE}")?;
                writeln!(formatter)?;
                write_form(formatter, draft)?;
                writeln!(formatter)?;
                write_users(formatter, users)
            }
        }
    }
}

fn write_form(formatter: &mut fmt::Formatter<'_>, draft: &UserDraft) -> fmt::Result {
    writeln!(formatter, "Add New User")?;
    writeln!(
        formatter,
        "  Name:  {}",
        field_or_placeholder(&draft.name, NAME_PLACEHOLDER)
    )?;
    writeln!(
        formatter,
        "  Email: {}",
        field_or_placeholder(&draft.email, EMAIL_PLACEHOLDER)
    )
}

fn write_users(formatter: &mut fmt::Formatter<'_>, users: &[User]) -> fmt::Result {
    writeln!(formatter, "Users ({})", users.len())?;
    for user in users {
        write_card(formatter, user)?;
    }
    Ok(())
}

// Cards are keyed by id so repeated renders of the same list line up.
fn write_card(formatter: &mut fmt::Formatter<'_>, user: &User) -> fmt::Result {
    let key = format!("[{}]", user.id);
    writeln!(formatter, "  {key} {}", user.name)?;
    writeln!(formatter, "  {:width$} {}", "", user.email, width = key.len())
}

fn field_or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
