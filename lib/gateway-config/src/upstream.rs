use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::primitives::retry_policy::RetryPolicyConfig;

#[derive(Clone, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Base URL of the movie-metadata REST API. Endpoint paths are appended to it.
    ///
    /// Can also be set via the `MOVIE_DB_BASE_URL` environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// The API key sent as the `api_key` query parameter on every upstream request.
    /// The gateway refuses to start without one.
    ///
    /// Usually provided via the `MOVIE_DB_API_KEY` environment variable.
    #[serde(default, skip_serializing)]
    api_key: Option<String>,

    /// Value of the `language` query parameter sent on every upstream request.
    ///
    /// Can also be set via the `MOVIE_DB_LANGUAGE` environment variable.
    #[serde(default = "default_language")]
    pub language: String,

    /// Timeout for a whole upstream request, including reading the response body.
    #[serde(
        default = "default_request_timeout",
        deserialize_with = "humantime_serde::deserialize",
        serialize_with = "humantime_serde::serialize"
    )]
    #[schemars(with = "String")]
    pub request_timeout: Duration,

    /// Timeout for establishing a connection to the upstream API.
    #[serde(
        default = "default_connect_timeout",
        deserialize_with = "humantime_serde::deserialize",
        serialize_with = "humantime_serde::serialize"
    )]
    #[schemars(with = "String")]
    pub connect_timeout: Duration,

    /// Retry policy for transient upstream failures.
    #[serde(default)]
    pub retry: RetryPolicyConfig,
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("language", &self.language)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("retry", &self.retry)
            .finish()
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            language: default_language(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            retry: RetryPolicyConfig::default(),
        }
    }
}

impl UpstreamConfig {
    /// The configured API key, or `None` when it is missing or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

fn default_base_url() -> Url {
    Url::parse("https://api.themoviedb.org/3").expect("default base url is valid")
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}
