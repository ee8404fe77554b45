use crate::error::ParseError;
use crate::flags::DisplayFlags;
use serde::Deserialize;
use std::str::FromStr;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, time::ChronoLocal, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Timestamp layout used when [`DisplayFlags::TIME`] is set
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// Structured JSON format
    Json,
}

impl FromStr for LogFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ParseError::UnknownFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for LogFormat {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Builds one `fmt` layer honoring `format` and the display `flags`
pub fn fmt_layer<S, W>(
    writer: W,
    format: LogFormat,
    flags: DisplayFlags,
    ansi: bool,
) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_level(flags.contains(DisplayFlags::LEVEL))
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(ansi);

    let timer = || ChronoLocal::new(TIME_FORMAT.to_string());
    match (format, flags.contains(DisplayFlags::TIME)) {
        (LogFormat::Text, true) => layer.with_timer(timer()).boxed(),
        (LogFormat::Text, false) => layer.without_time().boxed(),
        (LogFormat::Json, true) => layer.json().with_timer(timer()).boxed(),
        (LogFormat::Json, false) => layer.json().without_time().boxed(),
    }
}
