use super::Backend;
use crate::fields::Fields;
use crate::record::Record;
use crate::severity::Severity;
use tracing::{event, Level};

/// Target attached to every event emitted through the facade
pub const TARGET: &str = "levelgate";

/// Backend that forwards records to the `tracing` crate
///
/// Whatever subscriber is installed decides sinks and formatting (see
/// [`crate::logging::init`]). Fatal records are emitted at `ERROR` with
/// `fatal = true`.
#[derive(Debug, Clone, Copy)]
pub struct TracingBackend {
    exit_on_fatal: bool,
}

impl TracingBackend {
    /// Backend that terminates the process with status 1 after a fatal record
    pub const fn new() -> Self {
        Self {
            exit_on_fatal: true,
        }
    }

    /// Controls whether a fatal record ends the process
    pub const fn exit_on_fatal(mut self, exit: bool) -> Self {
        self.exit_on_fatal = exit;
        self
    }

    pub const fn exits_on_fatal(&self) -> bool {
        self.exit_on_fatal
    }

    fn after_fatal(&self) {
        if self.exit_on_fatal {
            std::process::exit(1);
        }
    }
}

impl Default for TracingBackend {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! record_event {
    ($level:expr, $tag:ident, $record:ident $(, $extra:ident = $value:expr)?) => {
        event!(
            target: TARGET,
            $level,
            module = $record.module,
            method = $record.method,
            msg = $record.msg,
            reqId = $record.req_id,
            args = %$record.args,
            $($extra = $value,)?
            "{}",
            $tag
        )
    };
}

macro_rules! fields_event {
    ($level:expr, $tag:ident, $fields:ident $(, $extra:ident = $value:expr)?) => {
        event!(
            target: TARGET,
            $level,
            fields = %$fields,
            $($extra = $value,)?
            "{}",
            $tag
        )
    };
}

impl Backend for TracingBackend {
    fn emit(&self, severity: Severity, tag: &str, record: &Record<'_>) {
        match severity {
            Severity::Trace => record_event!(Level::TRACE, tag, record),
            Severity::Debug => record_event!(Level::DEBUG, tag, record),
            Severity::Info => record_event!(Level::INFO, tag, record),
            Severity::Warn => record_event!(Level::WARN, tag, record),
            Severity::Error => record_event!(Level::ERROR, tag, record),
            Severity::Fatal => {
                record_event!(Level::ERROR, tag, record, fatal = true);
                self.after_fatal();
            }
        }
    }

    fn emit_fields(&self, severity: Severity, tag: &str, fields: &Fields) {
        match severity {
            Severity::Trace => fields_event!(Level::TRACE, tag, fields),
            Severity::Debug => fields_event!(Level::DEBUG, tag, fields),
            Severity::Info => fields_event!(Level::INFO, tag, fields),
            Severity::Warn => fields_event!(Level::WARN, tag, fields),
            Severity::Error => fields_event!(Level::ERROR, tag, fields),
            Severity::Fatal => {
                fields_event!(Level::ERROR, tag, fields, fatal = true);
                self.after_fatal();
            }
        }
    }
}
