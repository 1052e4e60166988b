mod consts;
pub mod error;
mod http_utils;
mod logger;
pub mod pipeline;
pub mod schema;
mod shared_state;

use std::sync::Arc;

use crate::{
    consts::GATEWAY_VERSION, error::GatewayInitError, http_utils::probes::health_check_handler,
    logger::configure_logging, pipeline::graphql_request_handler,
};

pub use crate::shared_state::{GatewaySharedState, SharedStateError};

use movie_gateway_config::{http_server::HEALTH_CHECK_PATH, load_config, MovieGatewayConfig};
use movie_gateway_internal::logging::request_span::request_span;
use ntex::{
    util::Bytes,
    web::{self, HttpRequest},
};
use tracing::{debug, info, Instrument};

async fn graphql_endpoint_handler(
    request: HttpRequest,
    body_bytes: Bytes,
    app_state: web::types::State<Arc<GatewaySharedState>>,
) -> impl web::Responder {
    let span = request_span(&request);

    async {
        let outcome = graphql_request_handler(&request, body_bytes, app_state.get_ref()).await;
        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                debug!(error = %err, "request rejected");
                err.into()
            }
        };
        debug!(status = response.status().as_u16(), "request completed");
        response
    }
    .instrument(span)
    .await
}

pub async fn gateway_entrypoint() -> Result<(), GatewayInitError> {
    let config_path = std::env::var("GATEWAY_CONFIG_FILE_PATH").ok();
    let gateway_config = load_config(config_path)?;
    let _log_guards = configure_logging(&gateway_config.log);
    info!("movie-gateway@{} starting...", GATEWAY_VERSION);

    let addr = gateway_config.address();
    let shared_state = configure_app_from_config(gateway_config)?;
    info!(
        "serving GraphQL on http://{}{}",
        addr,
        shared_state.gateway_config.graphql_path()
    );

    web::HttpServer::new(async move || {
        web::App::new()
            .state(shared_state.clone())
            .configure(|service_config| {
                configure_ntex_app(service_config, &shared_state.gateway_config);
            })
    })
    .bind(&addr)
    .map_err(|err| GatewayInitError::HttpServerBindError(addr.clone(), err))?
    .run()
    .await
    .map_err(GatewayInitError::HttpServerStartError)?;

    info!("server stopped");

    Ok(())
}

pub fn configure_app_from_config(
    gateway_config: MovieGatewayConfig,
) -> Result<Arc<GatewaySharedState>, GatewayInitError> {
    let shared_state = GatewaySharedState::new(Arc::new(gateway_config))?;

    Ok(Arc::new(shared_state))
}

pub fn configure_ntex_app(
    service_config: &mut web::ServiceConfig,
    gateway_config: &MovieGatewayConfig,
) {
    service_config
        .route(
            gateway_config.graphql_path(),
            web::to(graphql_endpoint_handler),
        )
        .route(HEALTH_CHECK_PATH, web::to(health_check_handler));
}
