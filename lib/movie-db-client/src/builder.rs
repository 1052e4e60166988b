use std::time::Duration;

use reqwest_middleware::ClientBuilder;
use reqwest_retry::RetryTransientMiddleware;
use retry_policies::policies::ExponentialBackoff;
use url::Url;

use crate::{error::MovieDbError, session::GuestSessionCache, MovieDbClient};

pub struct MovieDbClientBuilder {
    pub(crate) base_url: Option<Url>,
    pub(crate) api_key: Option<String>,
    pub(crate) language: String,
    pub(crate) user_agent: Option<String>,
    pub(crate) connect_timeout: Duration,
    pub(crate) request_timeout: Duration,
    pub(crate) retry_policy: ExponentialBackoff,
}

impl Default for MovieDbClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            language: "en-US".to_string(),
            user_agent: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            retry_policy: ExponentialBackoff::builder().build_with_max_retries(0),
        }
    }
}

impl MovieDbClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL all endpoint paths are appended to, e.g. `https://api.themoviedb.org/3`.
    pub fn base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// API key sent as the `api_key` query parameter.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Value of the `language` query parameter.
    /// Default: `en-US`
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// User-Agent header to be sent with each request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Default: 10 seconds
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Default: 30 seconds
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Policy for retrying transient failures.
    /// Default: no retries
    pub fn retry_policy(mut self, retry_policy: ExponentialBackoff) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn build(self) -> Result<MovieDbClient, MovieDbError> {
        let base_url = self
            .base_url
            .ok_or_else(|| MovieDbError::InvalidBaseUrl(String::new()))?;
        if base_url.cannot_be_a_base() {
            return Err(MovieDbError::InvalidBaseUrl(base_url.to_string()));
        }

        let api_key = self
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(MovieDbError::MissingApiKey)?;

        let mut reqwest_agent = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout);

        if let Some(user_agent) = self.user_agent {
            reqwest_agent = reqwest_agent.user_agent(user_agent);
        }

        let reqwest_agent = reqwest_agent
            .build()
            .map_err(MovieDbError::ClientCreation)?;
        let http_client = ClientBuilder::new(reqwest_agent)
            .with(RetryTransientMiddleware::new_with_policy(self.retry_policy))
            .build();

        Ok(MovieDbClient {
            http_client,
            base_url,
            api_key,
            language: self.language,
            guest_session: GuestSessionCache::new(),
        })
    }
}
