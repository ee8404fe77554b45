//! Process-wide default logger and the module-level entry points over it.
//!
//! Code that needs its own threshold should build a [`Logger`] and pass it
//! around instead of touching the default.

use crate::fields::Fields;
use crate::filter::Logger;
use crate::flags::{DisplayFlags, LogSwitch};
use crate::severity::Severity;
use std::fmt;
use std::sync::OnceLock;

static STD_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The default logger, created over [`crate::backend::TracingBackend`] on first use
pub fn std_logger() -> &'static Logger {
    STD_LOGGER.get_or_init(Logger::new_default)
}

/// Replaces the default backend before first use
///
/// Returns the logger back if the default was already initialized.
pub fn install_std_logger(logger: Logger) -> Result<(), Logger> {
    STD_LOGGER.set(logger)
}

pub fn set_level(level: Severity) {
    std_logger().set_level(level);
}

pub fn get_level() -> Severity {
    std_logger().level()
}

pub fn set_flags(flags: DisplayFlags) {
    std_logger().set_flags(flags);
}

pub fn set_sql(switch: LogSwitch) {
    std_logger().set_sql(switch);
}

pub fn enabled(severity: Severity) -> bool {
    std_logger().enabled(severity)
}

pub fn trace(module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
    std_logger().trace(module, method, msg, req_id, args)
}

pub fn debug(module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
    std_logger().debug(module, method, msg, req_id, args)
}

pub fn info(module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
    std_logger().info(module, method, msg, req_id, args)
}

pub fn warn(module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
    std_logger().warn(module, method, msg, req_id, args)
}

pub fn error(module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
    std_logger().error(module, method, msg, req_id, args)
}

pub fn fatal(module: &str, method: &str, msg: &str, req_id: u32, args: &Fields) {
    std_logger().fatal(module, method, msg, req_id, args)
}

/// Byte-sink write on the default logger; always returns `Ok(buf.len())`
pub fn write(buf: &[u8]) -> std::io::Result<usize> {
    Ok(std_logger().write_bytes(buf))
}

pub fn output_sql(state: &str, sql: fmt::Arguments<'_>) {
    std_logger().output_sql(state, sql)
}
