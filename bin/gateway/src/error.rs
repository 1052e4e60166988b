use movie_gateway_config::GatewayConfigError;

use crate::shared_state::SharedStateError;

#[derive(Debug, thiserror::Error)]
pub enum GatewayInitError {
    #[error(transparent)]
    GatewayConfigError(#[from] GatewayConfigError),
    #[error(transparent)]
    SharedStateError(#[from] SharedStateError),
    #[error("Failed to bind HTTP server to address: {0}. Error: {1}")]
    HttpServerBindError(String, std::io::Error),
    #[error("Failed to start HTTP server: {0}")]
    HttpServerStartError(std::io::Error),
}
