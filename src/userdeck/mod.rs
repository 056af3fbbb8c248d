//! User management core: configuration, the HTTP client, the state container,
//! the manager that drives it, form checks, and the text view.

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod form;
pub mod manager;
pub mod state;
pub mod types;
pub mod view;

pub use self::client::{HttpUsersApi, UsersApi};
pub use self::config::AppConfig;
pub use self::errors::{ApiError, UiError};
pub use self::manager::UserManager;
pub use self::types::{DraftField, User, UserDraft, UserId};
