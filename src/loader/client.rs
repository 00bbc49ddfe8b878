//! Reqwest-backed page loader.
//!
//! Owns the backend base URL (injected, never read from the environment
//! here) and the HTTP client. Each operation is one request with no retry.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use super::{LoadError, LoadResult};
use crate::constants::{DEFAULT_FIRST_NAME, LOGIN_PATH, USERS_PATH};
use crate::models::{LoginPayload, User};

/// Loads page data from the backend service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PageLoader {
    client: Client,
    base_url: String,
    first_name: String,
}

impl PageLoader {
    /// Build a loader for `base_url`.
    ///
    /// The base URL is used as given. An empty or malformed value is not
    /// rejected here; requests built from it fail when sent.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, LoadError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(LoadError::Client)?;
        Ok(Self::with_client(client, base_url))
    }

    /// Build a loader around an existing client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            first_name: DEFAULT_FIRST_NAME.to_string(),
        }
    }

    /// Override the first name sent to the login endpoint.
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Load function for the user listing page.
    pub fn load_users(&self) -> LoadResult<Vec<User>> {
        let loader = self.clone();
        LoadResult::new(async move { loader.fetch_all_users().await })
    }

    /// Load function backed by the login call.
    pub fn load_user(&self) -> LoadResult<User> {
        let loader = self.clone();
        LoadResult::new(async move { loader.fetch_user().await })
    }

    /// Load function for the user listing page that keeps the raw body.
    pub fn load_users_raw(&self) -> LoadResult<String> {
        let loader = self.clone();
        LoadResult::new(async move { loader.inspect_all_users().await })
    }

    /// Load function for the login call that only keeps the status.
    pub fn load_login_status(&self) -> LoadResult<StatusCode> {
        let loader = self.clone();
        LoadResult::new(async move { loader.inspect_login().await })
    }

    /// `GET <base>/`, parsed as a list of users.
    ///
    /// The raw body is logged before any status or JSON check.
    pub async fn fetch_all_users(&self) -> Result<Vec<User>, LoadError> {
        let url = self.endpoint(USERS_PATH);
        let (status, body) = self.get_text(&url).await?;

        if !status.is_success() {
            return Err(LoadError::Status { url, status });
        }

        serde_json::from_str(&body).map_err(|source| LoadError::Decode { url, source })
    }

    /// `GET <base>/`, logging and returning the raw body.
    ///
    /// Neither the status nor the body is checked, so a non-JSON or error
    /// response still resolves.
    pub async fn inspect_all_users(&self) -> Result<String, LoadError> {
        let url = self.endpoint(USERS_PATH);
        let (_, body) = self.get_text(&url).await?;
        Ok(body)
    }

    /// `POST <base>/auth/login`, parsed as a single user.
    pub async fn fetch_user(&self) -> Result<User, LoadError> {
        let url = self.endpoint(LOGIN_PATH);
        let response = self.post_login(&url).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(LoadError::Status { url, status });
        }

        let body = response.text().await.map_err(|source| LoadError::Transport {
            url: url.clone(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| LoadError::Decode { url, source })
    }

    /// `POST <base>/auth/login`, returning only the status code.
    ///
    /// The body is never read, so any status (401 included) resolves.
    pub async fn inspect_login(&self) -> Result<StatusCode, LoadError> {
        let url = self.endpoint(LOGIN_PATH);
        let response = self.post_login(&url).await?;
        Ok(response.status())
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        format!("{base}{path}")
    }

    async fn get_text(&self, url: &str) -> Result<(StatusCode, String), LoadError> {
        debug!(url, "GET");
        let transport = |source: reqwest::Error| LoadError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        info!(url, status = status.as_u16(), body = %body, "users response");
        Ok((status, body))
    }

    async fn post_login(&self, url: &str) -> Result<reqwest::Response, LoadError> {
        debug!(url, first_name = %self.first_name, "POST");
        let payload = LoginPayload::new(self.first_name.as_str());

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|source| LoadError::Transport {
                url: url.to_string(),
                source,
            })?;

        info!(url, status = response.status().as_u16(), "login response");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader(base: &str) -> PageLoader {
        PageLoader::with_client(Client::new(), base)
    }

    #[test]
    fn endpoint_appends_path() {
        let loader = loader("http://backend:8080");
        assert_eq!(loader.endpoint(USERS_PATH), "http://backend:8080/");
        assert_eq!(loader.endpoint(LOGIN_PATH), "http://backend:8080/auth/login");
    }

    #[test]
    fn endpoint_trims_one_trailing_slash() {
        let loader = loader("http://backend:8080/");
        assert_eq!(loader.endpoint(LOGIN_PATH), "http://backend:8080/auth/login");
    }

    #[test]
    fn endpoint_with_empty_base_is_relative() {
        let loader = loader("");
        assert_eq!(loader.endpoint(USERS_PATH), "/");
    }

    #[test]
    fn first_name_defaults_and_overrides() {
        assert_eq!(loader("http://x").first_name(), "Alice");
        assert_eq!(loader("http://x").with_first_name("Bob").first_name(), "Bob");
    }

    #[test]
    fn new_with_timeout_keeps_base_url() {
        let loader = PageLoader::new("http://x", Some(Duration::from_secs(1))).unwrap();
        assert_eq!(loader.base_url(), "http://x");
    }

    #[tokio::test]
    async fn empty_base_url_rejects_as_transport_error() {
        let err = loader("").fetch_all_users().await.unwrap_err();
        assert!(matches!(err, LoadError::Transport { .. }), "got: {err:?}");
    }
}
