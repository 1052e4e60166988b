use std::{ffi::OsStr, path::Path};

use movie_gateway_config::log::exporters::{FileExporterConfig, FileRolling};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};

use crate::logging::utils::{create_targets_filter, formatted_layer, DynLayer};

static DEFAULT_LOG_FILE_NAME: &str = "movie-gateway.log";

fn rotation(rolling: FileRolling) -> Rotation {
    match rolling {
        FileRolling::Never => Rotation::NEVER,
        FileRolling::Minutely => Rotation::MINUTELY,
        FileRolling::Hourly => Rotation::HOURLY,
        FileRolling::Daily => Rotation::DAILY,
    }
}

fn file_appender(config: &FileExporterConfig) -> RollingFileAppender {
    let directory = match config.path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = config
        .path
        .file_name()
        .unwrap_or(OsStr::new(DEFAULT_LOG_FILE_NAME));

    RollingFileAppender::new(rotation(config.rolling), directory, file_name)
}

pub fn build_file_layer<S>(config: &FileExporterConfig) -> (DynLayer<S>, WorkerGuard)
where
    S: tracing::Subscriber
        + for<'span> tracing_subscriber::registry::LookupSpan<'span>
        + Send
        + Sync,
{
    let (writer, guard) = tracing_appender::non_blocking(file_appender(config));
    let filter = create_targets_filter(&config.level, config.log_internals);

    (formatted_layer(writer, &config.format, false, filter), guard)
}
