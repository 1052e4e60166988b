use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct GraphiQLConfig {
    /// Serves the GraphiQL IDE on `GET` requests to the GraphQL endpoint that carry no query.
    ///
    /// You can override this setting with the `GRAPHIQL_ENABLED` environment variable.
    pub enabled: bool,
}

impl Default for GraphiQLConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
