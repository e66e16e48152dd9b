use crate::error::SinkError;
use crate::record::Record;
use crate::severity::Severity;
use crate::sink::Sink;

/// This [Sink] prints `[<tag>] <message>` to the web browser console
///
/// The severity selects `console.debug`, `console.info`, `console.warn` or `console.error`.
/// The console method is looked up on every write and called through `Function.call`, so a missing
/// console, a missing method or a throwing call are reported as an
/// [Unavailable](crate::error::SinkErrorKind::Unavailable) error instead of trapping.
/// Outside of `wasm32` targets every write fails with that error.
#[derive(Debug)]
pub struct JsConsoleSink;

impl JsConsoleSink {
    pub fn new() -> Self {
        Self
    }

    /// The name of the `console` method used for `severity`
    pub fn console_method(severity: Severity) -> &'static str {
        match severity {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error => "error",
        }
    }
}

impl Default for JsConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for JsConsoleSink {
    #[cfg(target_arch = "wasm32")]
    fn write(&mut self, record: &Record) -> Result<(), SinkError> {
        use js_sys::{Function, Reflect};

        let console = Reflect::get(&js_sys::global(), &"console".into()).
                map_err(|_| SinkError::unavailable("The global object can not be inspected"))?;
        if !console.is_object() {
            return Err(SinkError::unavailable("The global object has no console"));
        }

        let method = Reflect::get(&console, &Self::console_method(record.severity()).into()).
                map_err(|_| SinkError::unavailable("The console can not be inspected"))?;
        if !method.is_function() {
            return Err(SinkError::unavailable("The console method does not exist"));
        }

        let log = format!("[{}] {}", record.tag(), record.message());
        Function::from(method).call1(&console, &log.as_str().into()).
                map_err(|_| SinkError::unavailable("The console call threw an exception"))?;

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&mut self, record: &Record) -> Result<(), SinkError> {
        let _ = record;

        Err(SinkError::unavailable("The browser console is only available on wasm32 targets"))
    }
}
