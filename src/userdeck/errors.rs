use thiserror::Error;

/// Transport-level failures. Only logged; the UI shows a [`UiError`] instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

/// User-facing errors. Every failure of an operation maps to the same message.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("Failed to fetch users")]
    FetchFailed,
    #[error("Failed to create user")]
    CreateFailed,
}
