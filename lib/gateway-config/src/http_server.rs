use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub static HEALTH_CHECK_PATH: &str = "/health";

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct HttpServerConfig {
    /// Interface the listener binds to. Defaults to all interfaces.
    ///
    /// Can also be set via the `HOST` environment variable.
    pub host: String,

    /// Listener port, `4000` unless configured.
    ///
    /// Can also be set via the `PORT` environment variable.
    pub port: u16,

    /// The path on which GraphQL requests (and GraphiQL, when enabled) are served.
    /// Must be absolute and must not collide with the `/health` probe.
    pub graphql_endpoint: String,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 4000,
            graphql_endpoint: "/graphql".into(),
        }
    }
}

impl HttpServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub(crate) fn has_routable_graphql_endpoint(&self) -> bool {
        self.graphql_endpoint.starts_with('/') && self.graphql_endpoint != HEALTH_CHECK_PATH
    }
}
