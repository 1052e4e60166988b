use movie_gateway_config::log::shared::{LogFormat, LogLevel};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::NonBlocking;
use tracing_subscriber::{filter::Targets, fmt::time::UtcTime, Layer};

static INTERNAL_CRATES: &[&str] = &[
    "ntex_server",
    "ntex_rt",
    "ntex_service",
    "ntex_net",
    "ntex_io",
    "ntex",
    "hyper_util",
    "reqwest",
    "reqwest_retry",
    "mockito",
];

pub fn create_targets_filter(log_level: &LogLevel, internals: bool) -> Targets {
    let level_filter: LevelFilter = log_level.into();
    let internals_filter = match internals {
        true => level_filter,
        false => LevelFilter::OFF,
    };

    Targets::new()
        .with_targets(
            INTERNAL_CRATES
                .iter()
                .map(|crate_name| (*crate_name, internals_filter))
                .collect::<Vec<(&str, LevelFilter)>>(),
        )
        .with_default(level_filter)
}

pub type DynLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// The fmt layer shared by all exporters: RFC 3339 UTC timestamps, no targets or thread ids.
/// JSON lines carry the fields of the current span (the request id, among others).
pub(crate) fn formatted_layer<S>(
    writer: NonBlocking,
    format: &LogFormat,
    ansi: bool,
    filter: Targets,
) -> DynLayer<S>
where
    S: tracing::Subscriber
        + for<'span> tracing_subscriber::registry::LookupSpan<'span>
        + Send
        + Sync,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_timer(UtcTime::rfc_3339())
        .with_thread_ids(false)
        .with_target(false);

    match format {
        LogFormat::Json => layer
            .json()
            .with_ansi(false)
            .flatten_event(true)
            .with_current_span(true)
            .with_filter(filter)
            .boxed(),
        LogFormat::Text => layer.compact().with_ansi(ansi).with_filter(filter).boxed(),
    }
}
