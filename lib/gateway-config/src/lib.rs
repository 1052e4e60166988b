mod env_overrides;
pub mod graphiql;
pub mod http_server;
pub mod log;
pub mod primitives;
pub mod upstream;

use config::{Config, File, FileFormat, FileSourceFile};
use envconfig::Envconfig;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::path::PathBuf;

use crate::{
    env_overrides::{EnvVarOverrides, EnvVarOverridesError},
    graphiql::GraphiQLConfig,
    http_server::HttpServerConfig,
    log::LoggingConfig,
    upstream::UpstreamConfig,
};

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MovieGatewayConfig {
    /// The gateway logger configuration.
    ///
    /// By default the gateway logs at `info` level (`debug` in development builds) to stdout.
    #[serde(default)]
    pub log: LoggingConfig,

    /// Configuration for the HTTP server/listener.
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Configuration for the GraphiQL interface.
    #[serde(default)]
    pub graphiql: GraphiQLConfig,

    /// Configuration of the upstream movie-metadata API: location, credentials, timeouts and retries.
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl MovieGatewayConfig {
    pub fn address(&self) -> String {
        self.http.address()
    }

    pub fn graphql_path(&self) -> &str {
        &self.http.graphql_endpoint
    }

    fn validate(&self) -> Result<(), GatewayConfigError> {
        if self.upstream.api_key().is_none() {
            return Err(GatewayConfigError::MissingApiKey);
        }
        if !self.http.has_routable_graphql_endpoint() {
            return Err(GatewayConfigError::InvalidGraphQLEndpoint(
                self.http.graphql_endpoint.clone(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayConfigError {
    #[error("Failed to load configuration: {0}")]
    ConfigLoadError(#[from] config::ConfigError),
    #[error("Failed to apply configuration overrides: {0}")]
    EnvVarOverridesError(#[from] EnvVarOverridesError),
    #[error("Failed to load the environment variables: {0}")]
    EnvVarLoadError(#[from] envconfig::Error),
    #[error("Failed to get the current directory: {0}")]
    CurrentDirError(std::io::Error),
    #[error("Failed to parse the configuration file path: {0}")]
    ConfigPathParseError(Infallible),
    #[error("Missing upstream API key: set 'upstream.api_key' or the MOVIE_DB_API_KEY environment variable")]
    MissingApiKey,
    #[error("Invalid 'http.graphql_endpoint' value '{0}': expected an absolute path other than '/health'")]
    InvalidGraphQLEndpoint(String),
}

static DEFAULT_FILE_NAMES: &[&str] = &[
    "movie-gateway.config.yaml",
    "movie-gateway.config.yml",
    "movie-gateway.config.json",
    "movie-gateway.config.json5",
];

pub fn load_config(
    override_config_path: Option<String>,
) -> Result<MovieGatewayConfig, GatewayConfigError> {
    let env_overrides = EnvVarOverrides::init_from_env()?;
    let mut config = Config::builder();

    if let Some(path_str) = override_config_path {
        let path_buf = path_str
            .parse::<PathBuf>()
            .map_err(GatewayConfigError::ConfigPathParseError)?;
        let as_file: File<FileSourceFile, _> = path_buf.into();

        config = config.add_source(as_file.required(true));
    } else {
        let current_dir = std::env::current_dir().map_err(GatewayConfigError::CurrentDirError)?;
        for name in DEFAULT_FILE_NAMES {
            let path = current_dir.join(name);
            let as_file: File<FileSourceFile, _> = path.into();
            config = config.add_source(as_file.required(false));
        }
    }

    config = env_overrides.apply_overrides(config)?;

    let gateway_config = config.build()?.try_deserialize::<MovieGatewayConfig>()?;
    gateway_config.validate()?;

    Ok(gateway_config)
}

pub fn parse_yaml_config(config_raw: &str) -> Result<MovieGatewayConfig, GatewayConfigError> {
    let gateway_config = Config::builder()
        .add_source(File::from_str(config_raw, FileFormat::Yaml))
        .build()?
        .try_deserialize::<MovieGatewayConfig>()?;
    gateway_config.validate()?;

    Ok(gateway_config)
}
