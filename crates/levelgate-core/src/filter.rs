use crate::backend::{Backend, TracingBackend};
use crate::fields::Fields;
use crate::flags::{DisplayFlags, LogSwitch};
use crate::record::Record;
use crate::severity::Severity;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Level filter in front of a [`Backend`]
///
/// Calls below the current threshold return before the record is built.
/// State lives in plain atomics, so a concurrent `set_level` may take a
/// moment to be observed by other threads.
pub struct Logger {
    level: AtomicU8,
    flags: AtomicU8,
    sql: AtomicBool,
    backend: Arc<dyn Backend>,
}

impl Logger {
    /// Creates a logger at the default `Info` threshold
    pub fn new(flags: DisplayFlags, backend: Arc<dyn Backend>) -> Self {
        Self {
            level: AtomicU8::new(Severity::default().rank()),
            flags: AtomicU8::new(flags.bits()),
            sql: AtomicBool::new(LogSwitch::default().is_on()),
            backend,
        }
    }

    /// Logger with default flags over `backend`
    pub fn with_backend<B: Backend + 'static>(backend: B) -> Self {
        Self::new(DisplayFlags::default(), Arc::new(backend))
    }

    /// Logger over [`TracingBackend`] with `TIME | LEVEL` flags
    pub fn new_default() -> Self {
        Self::with_backend(TracingBackend::new())
    }

    /// Any record below `level` is dropped
    pub fn set_level(&self, level: Severity) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }

    pub fn level(&self) -> Severity {
        // Only valid ranks are ever stored.
        Severity::from_rank(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Whether a record at `severity` would reach the backend
    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.rank() >= self.level.load(Ordering::Relaxed)
    }

    pub fn set_flags(&self, flags: DisplayFlags) {
        self.flags.store(flags.bits(), Ordering::Relaxed);
    }

    pub fn flags(&self) -> DisplayFlags {
        DisplayFlags::from_bits_truncate(self.flags.load(Ordering::Relaxed))
    }

    pub fn set_sql(&self, switch: LogSwitch) {
        self.sql.store(switch.is_on(), Ordering::Relaxed);
    }

    pub fn sql(&self) -> LogSwitch {
        if self.sql.load(Ordering::Relaxed) {
            LogSwitch::On
        } else {
            LogSwitch::Off
        }
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    /// Forwards a record to the backend if `severity` meets the threshold
    #[inline]
    pub fn emit(
        &self,
        severity: Severity,
        module: &str,
        method: &str,
        msg: &str,
        req_id: u32,
        args: &Fields,
    ) {
        if !self.enabled(severity) {
            return;
        }

        let record = Record::new(module, method, msg, req_id, args);
        self.backend.emit(severity, severity.name(), &record);
    }

    pub fn trace(&self, module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
        self.emit(Severity::Trace, module, method, msg, req_id, args)
    }

    pub fn debug(&self, module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
        self.emit(Severity::Debug, module, method, msg, req_id, args)
    }

    pub fn info(&self, module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
        self.emit(Severity::Info, module, method, msg, req_id, args)
    }

    pub fn warn(&self, module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
        self.emit(Severity::Warn, module, method, msg, req_id, args)
    }

    pub fn error(&self, module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
        self.emit(Severity::Error, module, method, msg, req_id, args)
    }

    /// Process termination, if any, is up to the backend
    pub fn fatal(&self, module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
        self.emit(Severity::Fatal, module, method, msg, req_id, args)
    }

    /// Logs a SQL statement with its execution state
    ///
    /// Ignores the severity threshold; only the SQL switch silences it.
    pub fn output_sql(&self, state: &str, sql: fmt::Arguments<'_>) {
        if !self.sql().is_on() {
            return;
        }

        let fields = Fields::new()
            .with("state", state)
            .with("sql", sql.to_string());
        self.backend.emit_fields(Severity::Info, "sql", &fields);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new_default()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("flags", &self.flags())
            .field("sql", &self.sql())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn memory_logger() -> (Logger, Arc<MemoryBackend>) {
        let backend = Arc::new(MemoryBackend::new());
        let logger = Logger::new(DisplayFlags::default(), backend.clone());
        (logger, backend)
    }

    #[test]
    fn default_threshold_is_info() {
        let (logger, backend) = memory_logger();
        assert_eq!(logger.level(), Severity::Info);

        let args = Fields::new();
        logger.trace("m", "f", "t", 1, &args);
        logger.debug("m", "f", "d", 1, &args);
        assert!(backend.is_empty());

        logger.info("m", "f", "i", 1, &args);
        logger.warn("m", "f", "w", 1, &args);
        logger.error("m", "f", "e", 1, &args);
        logger.fatal("m", "f", "x", 1, &args);
        let tags: Vec<_> = backend.take().into_iter().map(|e| e.tag).collect();
        assert_eq!(tags, vec!["INFO", "WARN", "ERROR", "FATAL"]);
    }

    #[test]
    fn forwards_iff_rank_meets_threshold() {
        let (logger, backend) = memory_logger();
        let args = Fields::new();

        for threshold in Severity::ALL {
            logger.set_level(threshold);
            for severity in Severity::ALL {
                logger.emit(severity, "m", "f", "msg", 7, &args);
                let forwarded = backend.take();
                if severity >= threshold {
                    assert_eq!(forwarded.len(), 1, "{severity} at {threshold}");
                    assert_eq!(forwarded[0].severity, severity);
                } else {
                    assert!(forwarded.is_empty(), "{severity} at {threshold}");
                }
            }
        }
    }

    #[test]
    fn set_level_round_trips() {
        let (logger, _) = memory_logger();
        for level in Severity::ALL {
            logger.set_level(level);
            assert_eq!(logger.level(), level);
        }
    }

    #[test]
    fn warn_threshold_scenario() {
        let (logger, backend) = memory_logger();
        logger.set_level(Severity::Warn);

        logger.info("mod", "meth", "hello", 42, &Fields::new());
        assert!(backend.is_empty());

        logger.error("mod", "meth", "boom", 42, &Fields::new());
        let emitted = backend.take();
        assert_eq!(emitted.len(), 1);
        let record = &emitted[0];
        assert_eq!(record.severity, Severity::Error);
        assert_eq!(record.field("module").as_deref(), Some("mod"));
        assert_eq!(record.field("method").as_deref(), Some("meth"));
        assert_eq!(record.field("msg").as_deref(), Some("boom"));
        assert_eq!(record.field("reqId").as_deref(), Some("42"));
    }

    #[test]
    fn flags_do_not_affect_filtering() {
        let (logger, backend) = memory_logger();
        logger.set_flags(DisplayFlags::empty());
        assert_eq!(logger.flags(), DisplayFlags::empty());

        logger.info("m", "f", "still here", 0, &Fields::new());
        assert_eq!(backend.len(), 1);
        assert_eq!(
            backend.emissions()[0].field("msg").as_deref(),
            Some("still here")
        );
    }

    #[test]
    fn output_sql_ignores_threshold_but_honors_switch() {
        let (logger, backend) = memory_logger();
        logger.set_level(Severity::Fatal);

        logger.output_sql("OK", format_args!("select * from {} where id = {}", "t", 3));
        let emitted = backend.take();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].tag, "sql");
        assert_eq!(emitted[0].field("state").as_deref(), Some("OK"));
        assert_eq!(
            emitted[0].field("sql").as_deref(),
            Some("select * from t where id = 3")
        );

        logger.set_sql(LogSwitch::Off);
        logger.output_sql("OK", format_args!("select 1"));
        assert!(backend.is_empty());
    }
}
