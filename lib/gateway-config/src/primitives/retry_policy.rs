use retry_policies::policies::ExponentialBackoff;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RetryPolicyConfig {
    /// The maximum number of retries for transient upstream failures (connection errors, 5xx, 429).
    ///
    /// Defaults to `0`, so every upstream call is attempted exactly once.
    /// Retries use exponential backoff, see https://docs.rs/retry-policies/latest/retry_policies/policies/struct.ExponentialBackoff.html
    #[serde(default)]
    pub max_retries: u32,
}

impl From<&RetryPolicyConfig> for ExponentialBackoff {
    fn from(config: &RetryPolicyConfig) -> Self {
        ExponentialBackoff::builder().build_with_max_retries(config.max_retries)
    }
}
