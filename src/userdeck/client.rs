//! Client for the users endpoints. Endpoint paths are centralized here; the
//! manager only sees the [`UsersApi`] trait so tests can swap the transport.

use super::{
    api,
    config::AppConfig,
    errors::ApiError,
    types::{Envelope, User, UserDraft},
};
use reqwest::Client;
use std::future::Future;
use tracing::instrument;

const USERS_PATH: &str = "/users";

/// The two calls the user manager needs.
pub trait UsersApi {
    /// Fetches every user, unwrapped from the `data` envelope.
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>> + Send;

    /// Creates a user from the draft. The response body is ignored.
    fn create_user(&self, draft: &UserDraft)
        -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// [`UsersApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpUsersApi {
    client: Client,
    config: AppConfig,
}

impl HttpUsersApi {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let client = api::client(crate::APP_USER_AGENT)?;
        Ok(Self::with_client(client, config))
    }

    #[must_use]
    pub fn with_client(client: Client, config: AppConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl UsersApi for HttpUsersApi {
    #[instrument(skip(self), fields(base = %self.config.api_base_url))]
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let envelope: Envelope<Vec<User>> =
            api::get_json(&self.client, &self.config.api_base_url, USERS_PATH).await?;
        Ok(envelope.data)
    }

    #[instrument(skip(self, draft), fields(base = %self.config.api_base_url))]
    async fn create_user(&self, draft: &UserDraft) -> Result<(), ApiError> {
        api::post_json(&self.client, &self.config.api_base_url, USERS_PATH, draft).await
    }
}
