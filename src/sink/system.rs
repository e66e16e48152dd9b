use std::ffi::CString;
use crate::error::{SinkError, SinkErrorKind};
use crate::record::Record;
use crate::severity::Severity;
use crate::sink::Sink;

/// This [Sink] writes `<marker> [<tag>] <message>` lines to the system log (syslog)
#[derive(Debug)]
pub struct SystemSink {
    facility: libc::c_int,
}

impl SystemSink {
    pub fn new() -> Self {
        Self::with_facility(libc::LOG_USER)
    }

    /// # Arguments
    ///
    /// * `facility` - One of the `libc::LOG_*` facility constants (e.g. [libc::LOG_LOCAL0])
    pub fn with_facility(facility: libc::c_int) -> Self {
        Self {
            facility,
        }
    }

    pub fn priority(severity: Severity) -> libc::c_int {
        match severity {
            Severity::Debug => libc::LOG_DEBUG,
            Severity::Info => libc::LOG_INFO,
            Severity::Warning => libc::LOG_WARNING,
            Severity::Error => libc::LOG_ERR,
        }
    }
}

impl Default for SystemSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for SystemSink {
    fn write(&mut self, record: &Record) -> Result<(), SinkError> {
        let line = CString::new(record.to_marked_string()).map_err(|err| SinkError::from_error_with_message(
            SinkErrorKind::InvalidMessage,
            "Message contains a NUL byte",
            err,
        ))?;

        //The message is passed as an argument, never as the format string
        unsafe {
            libc::syslog(self.facility | Self::priority(record.severity()), c"%s".as_ptr(), line.as_ptr());
        }

        Ok(())
    }
}
