use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use crate::config::LoggerConfig;
use crate::logger::DailyLogger;
use crate::record::LogCall;
use crate::severity::Severity;

/// Clonable handle to a [DailyLogger] which can be shared across threads
///
/// # Locking
///
/// Every logging call and every configuration update holds the lock for its whole duration.
/// A call therefore always observes either the complete old or the complete new configuration,
/// and [update_config](SharedLogger::update_config) replaces tag, prefix and minimum severity at once.
/// Calls from different threads are dispatched in lock acquisition order.
#[derive(Debug, Clone)]
pub struct SharedLogger {
    inner: Arc<Mutex<DailyLogger>>,
}

impl SharedLogger {
    pub fn new(logger: DailyLogger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DailyLogger> {
        //A panicking sink must not disable logging for every other thread
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.lock().config().clone()
    }

    pub fn set_config(&self, config: LoggerConfig) {
        self.lock().set_config(config);
    }

    /// Atomically replaces the configuration with the result of `update`
    pub fn update_config(&self, update: impl FnOnce(LoggerConfig) -> LoggerConfig) {
        let mut logger = self.lock();
        let config = update(logger.config().clone());
        logger.set_config(config);
    }

    pub fn set_tag(&self, tag: impl Into<String>) {
        self.lock().set_tag(tag);
    }

    pub fn set_prefix(&self, prefix: Option<String>) {
        self.lock().set_prefix(prefix);
    }

    pub fn set_min_severity(&self, min_severity: Severity) {
        self.lock().set_min_severity(min_severity);
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.lock().is_enabled(severity)
    }

    pub fn log(&self, severity: Severity, message: &str, tag: Option<&str>, message_prefix: Option<&str>) {
        self.lock().log(severity, message, tag, message_prefix);
    }

    pub fn emit(&self, call: &LogCall<'_>) {
        self.lock().emit(call);
    }

    pub fn logf(&self, severity: Severity, fmt: fmt::Arguments<'_>) {
        self.lock().logf(severity, fmt);
    }

    pub fn logf_with(&self, severity: Severity, tag: Option<&str>, message_prefix: Option<&str>, fmt: fmt::Arguments<'_>) {
        self.lock().logf_with(severity, tag, message_prefix, fmt);
    }

    pub fn debug(&self, message: &str, tag: Option<&str>, message_prefix: Option<&str>) {
        self.lock().debug(message, tag, message_prefix);
    }

    pub fn info(&self, message: &str, tag: Option<&str>, message_prefix: Option<&str>) {
        self.lock().info(message, tag, message_prefix);
    }

    pub fn warning(&self, message: &str, tag: Option<&str>, message_prefix: Option<&str>) {
        self.lock().warning(message, tag, message_prefix);
    }

    pub fn error(&self, message: &str, tag: Option<&str>, message_prefix: Option<&str>) {
        self.lock().error(message, tag, message_prefix);
    }

    pub fn flush(&self) {
        self.lock().flush();
    }
}

impl From<DailyLogger> for SharedLogger {
    fn from(value: DailyLogger) -> Self {
        Self::new(value)
    }
}

impl Default for SharedLogger {
    fn default() -> Self {
        Self::new(DailyLogger::default())
    }
}
