pub mod file;
pub mod request_id;
pub mod request_span;
pub mod stdout;
pub mod utils;

use crate::logging::{file::build_file_layer, stdout::build_stdout_layer, utils::DynLayer};
use movie_gateway_config::log::{exporters::LogExporter, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;

/// Builds one layer per configured exporter.
///
/// The returned guards flush buffered log lines when dropped, so they must be kept alive
/// for as long as the process logs.
pub fn logging_layers_from_logger_config<S>(
    config: &LoggingConfig,
) -> (Vec<DynLayer<S>>, Vec<WorkerGuard>)
where
    S: tracing::Subscriber
        + for<'span> tracing_subscriber::registry::LookupSpan<'span>
        + Send
        + Sync,
{
    let mut layers = vec![];
    let mut guards = vec![];

    for exporter in config.as_list() {
        let (layer, guard) = match exporter {
            LogExporter::Stdout(config) => build_stdout_layer(&config),
            LogExporter::File(config) => build_file_layer(&config),
        };

        layers.push(layer);
        guards.push(guard);
    }

    (layers, guards)
}
