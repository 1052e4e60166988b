pub mod exporters;
pub mod shared;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::log::{
    exporters::{LogExporter, StdoutExporterConfig},
    shared::{default_log_internals, LogFormat, LogLevel},
};

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level of the default stdout exporter.
    ///
    /// Can also be set via the `LOG_LEVEL` environment variable.
    #[serde(default = "LogLevel::default")]
    pub level: LogLevel,

    /// Output format of the default stdout exporter.
    ///
    /// Can also be set via the `LOG_FORMAT` environment variable.
    #[serde(default = "LogFormat::default")]
    pub format: LogFormat,

    /// Emits logs produced by the HTTP server internals (ntex, hyper) as well.
    #[serde(default = "default_log_internals")]
    pub log_internals: bool,

    /// An explicit list of exporters. When set, it replaces the default stdout exporter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exporters: Vec<LogExporter>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            log_internals: default_log_internals(),
            exporters: vec![],
        }
    }
}

impl LoggingConfig {
    pub fn as_list(&self) -> Vec<LogExporter> {
        if !self.exporters.is_empty() {
            return self.exporters.clone();
        }

        vec![LogExporter::Stdout(StdoutExporterConfig {
            level: self.level.clone(),
            format: self.format.clone(),
            log_internals: self.log_internals,
        })]
    }
}
