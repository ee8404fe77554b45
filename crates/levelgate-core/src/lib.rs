pub mod backend;
pub mod error;
pub mod fields;
pub mod filter;
pub mod flags;
pub mod global;
pub mod logging;
pub mod record;
pub mod severity;
pub mod sink;

pub use backend::{Backend, MemoryBackend, TracingBackend};
pub use error::ParseError;
pub use fields::{FieldValue, Fields};
pub use filter::Logger;
pub use flags::{DisplayFlags, LogSwitch};
pub use global::{
    debug, enabled, error, fatal, get_level, info, install_std_logger, output_sql, set_flags,
    set_level, set_sql, std_logger, trace, warn, write,
};
pub use logging::{init, init_default, init_from_args};
pub use record::{Record, RECORD_FIELDS};
pub use severity::Severity;
