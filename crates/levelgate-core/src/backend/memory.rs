use super::Backend;
use crate::fields::Fields;
use crate::record::Record;
use crate::severity::Severity;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One emission as seen by [`MemoryBackend`]
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedEmission {
    pub severity: Severity,
    pub tag: String,
    pub fields: Fields,
}

impl CapturedEmission {
    /// Shortcut for `fields.get(name)` rendered as text
    pub fn field(&self, name: &str) -> Option<String> {
        self.fields.get(name).map(ToString::to_string)
    }
}

/// Backend that keeps every emission in memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    emissions: Mutex<Vec<CapturedEmission>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far
    pub fn emissions(&self) -> Vec<CapturedEmission> {
        self.lock().clone()
    }

    /// Drains captured emissions
    pub fn take(&self) -> Vec<CapturedEmission> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedEmission>> {
        self.emissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, severity: Severity, tag: &str, fields: Fields) {
        self.lock().push(CapturedEmission {
            severity,
            tag: tag.to_string(),
            fields,
        });
    }
}

impl Backend for MemoryBackend {
    fn emit(&self, severity: Severity, tag: &str, record: &Record<'_>) {
        self.push(severity, tag, record.to_fields());
    }

    fn emit_fields(&self, severity: Severity, tag: &str, fields: &Fields) {
        self.push(severity, tag, fields.clone());
    }
}
