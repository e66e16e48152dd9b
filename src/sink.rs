pub mod console;
pub mod fallback;
pub mod memory;

#[cfg(all(unix, feature = "syslog"))]
pub mod system;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(test)]
mod tests;

pub use console::ConsoleSink;
pub use fallback::FallbackSink;
pub use memory::{MemorySink, SharedBuffer};

#[cfg(all(unix, feature = "syslog"))]
pub use system::SystemSink;

#[cfg(feature = "wasm")]
pub use wasm::JsConsoleSink;

use std::fmt::Debug;
use crate::error::SinkError;
use crate::record::Record;

/// This trait is used to abstract the destination of composed log lines
///
/// Implementations must not panic. Failures are reported as [SinkError] and are handled by a
/// [FallbackSink] or discarded by the [DailyLogger](crate::logger::DailyLogger).
pub trait Sink: Debug + Send {
    /// Writes a single record
    ///
    /// # Arguments
    ///
    /// * `record` - The filtered and composed record
    fn write(&mut self, record: &Record) -> Result<(), SinkError>;

    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, record: &Record) -> Result<(), SinkError> {
        (**self).write(record)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }
}

/// Returns the browser console sink, falling back to stdio
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub fn default_sink() -> Box<dyn Sink> {
    Box::new(FallbackSink::new(JsConsoleSink::new(), ConsoleSink::stdio()))
}

/// Returns the system log sink, falling back to stdio
#[cfg(all(not(all(target_arch = "wasm32", feature = "wasm")), unix, feature = "syslog"))]
pub fn default_sink() -> Box<dyn Sink> {
    Box::new(FallbackSink::new(SystemSink::new(), ConsoleSink::stdio()))
}

/// Returns a sink which writes to stdout and stderr
#[cfg(not(any(all(target_arch = "wasm32", feature = "wasm"), all(unix, feature = "syslog"))))]
pub fn default_sink() -> Box<dyn Sink> {
    Box::new(ConsoleSink::stdio())
}
