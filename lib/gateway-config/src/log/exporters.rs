use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::log::shared::{default_log_internals, LogFormat, LogLevel};

/// A destination for log lines. Every exporter applies its own level filter and format.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LogExporter {
    /// Non-blocking writer on the process stdout.
    Stdout(StdoutExporterConfig),
    /// Non-blocking writer on a local file, optionally rotated.
    File(FileExporterConfig),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct StdoutExporterConfig {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_log_internals")]
    pub log_internals: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FileExporterConfig {
    /// Log file location. With rotation enabled, the rotation date is appended to the file name.
    pub path: PathBuf,
    #[serde(default)]
    pub rolling: FileRolling,
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_log_internals")]
    pub log_internals: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileRolling {
    #[default]
    Never,
    Minutely,
    Hourly,
    Daily,
}
