pub mod commands;
pub mod config;

use levelgate_core::logging::formatter::LogFormat;
use levelgate_core::{Fields, Logger, Severity};

/// Module name the tool's own diagnostics are logged under
pub const CLI_MODULE: &str = "levelgate_cli";

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for LogFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => LogFormat::Text,
            OutputFormat::Json => LogFormat::Json,
        }
    }
}

pub fn log_startup(logger: &Logger, config: Option<&str>) {
    let mut args = Fields::new().with("level", logger.level().name());
    if let Some(path) = config {
        args.push("config", path);
    }
    logger.debug(CLI_MODULE, "main", "Logging initialized", 0, &args);
}

pub fn log_dropped(logger: &Logger, severity: Severity) {
    logger.debug(
        CLI_MODULE,
        "emit",
        "Record below threshold, dropped",
        0,
        &Fields::new().with("severity", severity.name()),
    );
}

pub fn log_forwarded(logger: &Logger, lines: usize) {
    logger.debug(
        CLI_MODULE,
        "pipe",
        "Input forwarded",
        0,
        &Fields::new().with("lines", lines),
    );
}
