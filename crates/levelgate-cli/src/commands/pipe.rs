use anyhow::{Context, Result};
use levelgate_core::Logger;
use std::io::{BufRead, Write};

/// Copies `reader` line by line into the logger's byte sink
///
/// Returns the number of lines forwarded.
pub fn execute_pipe<R: BufRead>(reader: R, logger: &Logger) -> Result<usize> {
    let mut sink = logger;
    let mut count = 0;

    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        if line.is_empty() {
            continue;
        }
        sink.write_all(line.as_bytes())?;
        count += 1;
    }

    sink.flush()?;
    Ok(count)
}
