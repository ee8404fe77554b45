//! Structured-logger collaborators that accepted records are handed to.
//!
//! A backend owns everything past the level check, including whether a
//! fatal record ends the process.

pub mod memory;
pub mod tracing_backend;

pub use self::memory::{CapturedEmission, MemoryBackend};
pub use self::tracing_backend::TracingBackend;

use crate::fields::Fields;
use crate::record::Record;
use crate::severity::Severity;
use std::sync::Arc;

/// Receiver of records that passed the severity threshold
pub trait Backend: Send + Sync {
    /// Emits one facade record. `tag` is the severity's display name.
    fn emit(&self, severity: Severity, tag: &str, record: &Record<'_>);

    /// Emits a free-form field set (SQL lines).
    fn emit_fields(&self, severity: Severity, tag: &str, fields: &Fields);
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn emit(&self, severity: Severity, tag: &str, record: &Record<'_>) {
        (**self).emit(severity, tag, record)
    }

    fn emit_fields(&self, severity: Severity, tag: &str, fields: &Fields) {
        (**self).emit_fields(severity, tag, fields)
    }
}
