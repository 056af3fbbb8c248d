use crate::userdeck::{AppConfig, HttpUsersApi};
use anyhow::Result;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub config: AppConfig,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Builds the HTTP users client for the configured base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn users_api(&self) -> Result<HttpUsersApi> {
        Ok(HttpUsersApi::new(self.config.clone())?)
    }
}
