use config::{builder::BuilderState, ConfigBuilder, ConfigError};
use envconfig::Envconfig;
use tracing::debug;

use crate::log::shared::{LogFormat, LogLevel};

#[derive(Envconfig)]
pub struct EnvVarOverrides {
    // Logger overrides
    #[envconfig(from = "LOG_LEVEL")]
    pub log_level: Option<LogLevel>,
    #[envconfig(from = "LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    // GraphiQL overrides
    #[envconfig(from = "GRAPHIQL_ENABLED")]
    pub graphiql_enabled: Option<bool>,

    // HTTP overrides
    #[envconfig(from = "PORT")]
    pub http_port: Option<u64>,
    #[envconfig(from = "HOST")]
    pub http_host: Option<String>,

    // Upstream overrides
    #[envconfig(from = "MOVIE_DB_API_KEY")]
    pub movie_db_api_key: Option<String>,
    #[envconfig(from = "MOVIE_DB_BASE_URL")]
    pub movie_db_base_url: Option<String>,
    #[envconfig(from = "MOVIE_DB_LANGUAGE")]
    pub movie_db_language: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum EnvVarOverridesError {
    #[error("Failed to override configuration: {0}")]
    FailedToOverrideConfig(#[from] ConfigError),
}

impl EnvVarOverrides {
    pub fn apply_overrides<T: BuilderState>(
        mut self,
        mut config: ConfigBuilder<T>,
    ) -> Result<ConfigBuilder<T>, EnvVarOverridesError> {
        if let Some(log_level) = self.log_level.take() {
            debug!("[config-override] 'log.level' = {:?}", log_level);
            config = config.set_override("log.level", log_level.as_str())?;
        }
        if let Some(log_format) = self.log_format.take() {
            debug!("[config-override] 'log.format' = {:?}", log_format);
            config = config.set_override("log.format", log_format.as_str())?;
        }

        if let Some(http_port) = self.http_port.take() {
            debug!("[config-override] 'http.port' = {}", http_port);
            config = config.set_override("http.port", http_port)?;
        }
        if let Some(http_host) = self.http_host.take() {
            debug!("[config-override] 'http.host' = {}", http_host);
            config = config.set_override("http.host", http_host)?;
        }

        if let Some(graphiql_enabled) = self.graphiql_enabled.take() {
            debug!("[config-override] 'graphiql.enabled' = {}", graphiql_enabled);
            config = config.set_override("graphiql.enabled", graphiql_enabled)?;
        }

        // The key itself is never logged.
        if let Some(api_key) = self.movie_db_api_key.take() {
            debug!("[config-override] 'upstream.api_key' = <redacted>");
            config = config.set_override("upstream.api_key", api_key)?;
        }
        if let Some(base_url) = self.movie_db_base_url.take() {
            debug!("[config-override] 'upstream.base_url' = {}", base_url);
            config = config.set_override("upstream.base_url", base_url)?;
        }
        if let Some(language) = self.movie_db_language.take() {
            debug!("[config-override] 'upstream.language' = {}", language);
            config = config.set_override("upstream.language", language)?;
        }

        Ok(config)
    }
}
