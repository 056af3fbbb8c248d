//! # Userdeck (User Management Client)
//!
//! `userdeck` lists users fetched from a REST endpoint and submits a form to
//! create new ones. It talks to exactly two endpoints on a configurable base URL:
//!
//! - `GET {base}/users` returns `{ "data": [ { "id", "name", "email" }, ... ] }`.
//! - `POST {base}/users` accepts `{ "name", "email" }`; the response body is ignored.
//!
//! ## State Model
//!
//! All UI state lives in a single [`userdeck::state::State`] value that only
//! changes through explicit transitions. The phase is a sum type
//! (`Loading | Failed | Ready`), so a loading indicator and an error can never be
//! shown at the same time.
//!
//! Every fetch carries a sequence number. Results of fetches that were superseded
//! by a newer one are discarded instead of overwriting fresher data.
//!
//! ## Failure Model
//!
//! Transport, status and decoding failures all collapse to one fixed message per
//! operation ("Failed to fetch users", "Failed to create user"). The underlying
//! cause is only written to the log.

pub mod cli;
pub mod userdeck;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
