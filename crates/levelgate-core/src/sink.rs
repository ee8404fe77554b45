//! `std::io::Write` adapter so the facade can be handed to libraries that
//! only know how to write bytes.

use crate::fields::Fields;
use crate::filter::Logger;
use crate::record::Record;
use crate::severity::Severity;
use std::io;

pub const SINK_MODULE: &str = "web";
pub const SINK_METHOD: &str = "api";

impl Logger {
    /// Forwards `buf` as an `Info` message, bypassing the threshold
    ///
    /// Same record shape as the leveled calls, with request id 0. Always
    /// reports the whole buffer as written.
    pub fn write_bytes(&self, buf: &[u8]) -> usize {
        let msg = String::from_utf8_lossy(buf);
        let args = Fields::new();
        let record = Record::new(SINK_MODULE, SINK_METHOD, &msg, 0, &args);
        self.backend().emit(Severity::Info, Severity::Info.name(), &record);
        buf.len()
    }
}

impl io::Write for &Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.write_bytes(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Write for Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.write_bytes(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
