use anyhow::{Context, Result};
use levelgate_core::{FieldValue, Fields, Logger, Severity};

/// Parses `key=value` pairs into typed fields, keeping their order
pub fn parse_args(pairs: &[String]) -> Result<Fields> {
    pairs
        .iter()
        .map(|pair| -> Result<(String, FieldValue)> {
            let (key, value) = pair
                .split_once('=')
                .with_context(|| format!("Argument must look like key=value: {}", pair))?;
            if key.is_empty() {
                anyhow::bail!("Argument key cannot be empty: {}", pair);
            }
            Ok((key.to_string(), FieldValue::parse_lossy(value)))
        })
        .collect()
}

/// Emits one record through `logger`
///
/// Returns whether the record passed the threshold.
pub fn execute_emit(
    logger: &Logger,
    severity: Severity,
    module: &str,
    method: &str,
    msg: &str,
    req_id: u32,
    args: &[String],
) -> Result<bool> {
    let fields = parse_args(args)?;
    let accepted = logger.enabled(severity);
    logger.emit(severity, module, method, msg, req_id, &fields);
    Ok(accepted)
}
