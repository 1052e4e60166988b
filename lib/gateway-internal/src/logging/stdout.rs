use std::io::IsTerminal;

use movie_gateway_config::log::exporters::StdoutExporterConfig;
use tracing_appender::non_blocking::WorkerGuard;

use crate::logging::utils::{create_targets_filter, formatted_layer, DynLayer};

pub fn build_stdout_layer<S>(config: &StdoutExporterConfig) -> (DynLayer<S>, WorkerGuard)
where
    S: tracing::Subscriber
        + for<'span> tracing_subscriber::registry::LookupSpan<'span>
        + Send
        + Sync,
{
    let stdout = std::io::stdout();
    // Colors only when a human is watching.
    let ansi = stdout.is_terminal();
    let (writer, guard) = tracing_appender::non_blocking(stdout);
    let filter = create_targets_filter(&config.level, config.log_internals);

    (formatted_layer(writer, &config.format, ansi, filter), guard)
}
