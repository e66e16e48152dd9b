
use std::fmt;
use crate::config::LoggerConfig;
use crate::record::{LogCall, Record};
use crate::severity::Severity;
use crate::sink::{self, Sink};

/// Filters, composes and dispatches log calls to a [Sink]
///
/// Configuration updates require `&mut self`, therefore every call observes one coherent
/// configuration. Use [SharedLogger](crate::shared::SharedLogger) to share a logger across threads.
///
/// Logging never fails: records below the minimum severity are dropped silently and errors reported
/// by the sink (after its own fallback, if any) are discarded.
#[derive(Debug)]
pub struct DailyLogger {
    config: LoggerConfig,
    sink: Box<dyn Sink>,
}

impl DailyLogger {
    pub fn new(config: LoggerConfig, sink: Box<dyn Sink>) -> Self {
        Self {
            config,
            sink,
        }
    }

    /// Creates a logger with the default configuration which writes to `sink`
    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self::new(LoggerConfig::default(), Box::new(sink))
    }

    pub fn with_config(self, config: LoggerConfig) -> Self {
        Self {
            config,
            ..self
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LoggerConfig) {
        self.config = config;
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.config.set_tag(tag.into());
    }

    pub fn set_prefix(&mut self, prefix: Option<String>) {
        self.config.set_prefix(prefix);
    }

    pub fn set_min_severity(&mut self, min_severity: Severity) {
        self.config.set_min_severity(min_severity);
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.should_log(self.config.min_severity())
    }

    /// Logs a message
    ///
    /// # Arguments
    ///
    /// * `severity` - The severity of the message
    /// * `message` - The message body
    /// * `tag` - Overrides the configured default tag if present
    /// * `message_prefix` - Prepended as `<message_prefix>: ` to the message if present and not empty
    pub fn log(&mut self, severity: Severity, message: &str, tag: Option<&str>, message_prefix: Option<&str>) {
        let mut call = LogCall::new(severity, message);
        if let Some(tag) = tag {
            call = call.with_tag(tag);
        }
        if let Some(message_prefix) = message_prefix {
            call = call.with_message_prefix(message_prefix);
        }

        self.emit(&call);
    }

    pub fn emit(&mut self, call: &LogCall<'_>) {
        let Some(record) = Record::compose(&self.config, call) else {
            return;
        };

        //Failures of the sink never reach the caller
        let _ = self.sink.write(&record);
    }

    /// Logs a formatted message, the message is only rendered if `severity` is enabled
    pub fn logf(&mut self, severity: Severity, fmt: fmt::Arguments<'_>) {
        if !self.is_enabled(severity) {
            return;
        }

        self.log(severity, &fmt.to_string(), None, None);
    }

    /// Logs a formatted message with an optional tag override and message prefix
    pub fn logf_with(&mut self, severity: Severity, tag: Option<&str>, message_prefix: Option<&str>, fmt: fmt::Arguments<'_>) {
        if !self.is_enabled(severity) {
            return;
        }

        self.log(severity, &fmt.to_string(), tag, message_prefix);
    }

    /// Logs a debug message, see [log](DailyLogger::log) for the optional arguments
    pub fn debug(&mut self, message: &str, tag: Option<&str>, message_prefix: Option<&str>) {
        self.log(Severity::Debug, message, tag, message_prefix);
    }

    pub fn info(&mut self, message: &str, tag: Option<&str>, message_prefix: Option<&str>) {
        self.log(Severity::Info, message, tag, message_prefix);
    }

    pub fn warning(&mut self, message: &str, tag: Option<&str>, message_prefix: Option<&str>) {
        self.log(Severity::Warning, message, tag, message_prefix);
    }

    pub fn error(&mut self, message: &str, tag: Option<&str>, message_prefix: Option<&str>) {
        self.log(Severity::Error, message, tag, message_prefix);
    }

    pub fn flush(&mut self) {
        let _ = self.sink.flush();
    }
}

impl Default for DailyLogger {
    fn default() -> Self {
        Self::new(LoggerConfig::default(), sink::default_sink())
    }
}
