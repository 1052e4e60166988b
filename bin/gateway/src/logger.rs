use movie_gateway_config::log::LoggingConfig;
use movie_gateway_internal::logging::logging_layers_from_logger_config;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

/// Installs the global subscriber. Dropping the returned guards stops the background writers.
pub fn configure_logging(config: &LoggingConfig) -> Vec<WorkerGuard> {
    let (layers, guards) = logging_layers_from_logger_config::<Registry>(config);

    tracing_subscriber::registry().with(layers).init();

    guards
}
