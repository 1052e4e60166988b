use std::sync::Arc;

use movie_db_client::{MovieDbClient, MovieDbError};
use movie_gateway_config::{upstream::UpstreamConfig, MovieGatewayConfig};

use crate::{
    consts::GATEWAY_VERSION,
    schema::{build_schema, MovieSchema},
};

pub struct GatewaySharedState {
    pub gateway_config: Arc<MovieGatewayConfig>,
    pub schema: MovieSchema,
}

impl GatewaySharedState {
    pub fn new(gateway_config: Arc<MovieGatewayConfig>) -> Result<Self, SharedStateError> {
        let client = movie_db_client_from_config(&gateway_config.upstream)?;

        Ok(Self {
            schema: build_schema(client),
            gateway_config,
        })
    }
}

fn movie_db_client_from_config(config: &UpstreamConfig) -> Result<MovieDbClient, MovieDbError> {
    let mut builder = MovieDbClient::builder()
        .base_url(config.base_url.clone())
        .language(config.language.as_str())
        .user_agent(format!("movie-gateway/{}", GATEWAY_VERSION))
        .connect_timeout(config.connect_timeout)
        .request_timeout(config.request_timeout)
        .retry_policy((&config.retry).into());

    if let Some(api_key) = config.api_key() {
        builder = builder.api_key(api_key);
    }

    builder.build()
}

#[derive(thiserror::Error, Debug)]
pub enum SharedStateError {
    #[error("Failed to create the upstream client: {0}")]
    UpstreamClient(#[from] MovieDbError),
}
