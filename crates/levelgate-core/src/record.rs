use crate::fields::{FieldValue, Fields};

/// Canonical field names, in emission order
pub const MODULE_FIELD: &str = "module";
pub const METHOD_FIELD: &str = "method";
pub const MSG_FIELD: &str = "msg";
pub const REQ_ID_FIELD: &str = "reqId";
pub const ARGS_FIELD: &str = "args";
pub const RECORD_FIELDS: [&str; 5] = [
    MODULE_FIELD,
    METHOD_FIELD,
    MSG_FIELD,
    REQ_ID_FIELD,
    ARGS_FIELD,
];

/// One accepted logging call. Borrowed from the caller and only alive for the
/// duration of the backend call.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub module: &'a str,
    pub method: &'a str,
    pub msg: &'a str,
    /// Correlates log lines belonging to the same request
    pub req_id: u32,
    pub args: &'a Fields,
}

impl<'a> Record<'a> {
    pub fn new(
        module: &'a str,
        method: &'a str,
        msg: &'a str,
        req_id: u32,
        args: &'a Fields,
    ) -> Self {
        Self {
            module,
            method,
            msg,
            req_id,
            args,
        }
    }

    /// Owned `module`, `method`, `msg`, `reqId`, `args` collection
    pub fn to_fields(&self) -> Fields {
        Fields::new()
            .with(MODULE_FIELD, self.module)
            .with(METHOD_FIELD, self.method)
            .with(MSG_FIELD, self.msg)
            .with(REQ_ID_FIELD, self.req_id)
            .with(ARGS_FIELD, FieldValue::Record(self.args.clone()))
    }
}
