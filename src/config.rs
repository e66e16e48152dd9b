
use crate::severity::Severity;

/// Logger configuration
///
/// A configuration is a plain value: the `with_*` methods consume it and return an updated copy.
/// Use [DailyLogger::set_config](crate::logger::DailyLogger::set_config) or
/// [SharedLogger::update_config](crate::shared::SharedLogger::update_config) to apply it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct LoggerConfig {
    tag: String,
    prefix: Option<String>,
    min_severity: Severity,
}

impl LoggerConfig {
    pub const DEFAULT_TAG: &'static str = "DailyLogger";

    pub fn new(tag: impl Into<String>, prefix: Option<String>, min_severity: Severity) -> Self {
        Self {
            tag: tag.into(),
            prefix,
            min_severity,
        }
    }

    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..self
        }
    }

    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..self
        }
    }

    pub fn without_prefix(self) -> Self {
        Self {
            prefix: None,
            ..self
        }
    }

    pub fn with_min_severity(self, min_severity: Severity) -> Self {
        Self {
            min_severity,
            ..self
        }
    }

    /// The tag used by calls which do not provide their own
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn min_severity(&self) -> Severity {
        self.min_severity
    }

    pub(crate) fn set_tag(&mut self, tag: String) {
        self.tag = tag;
    }

    pub(crate) fn set_prefix(&mut self, prefix: Option<String>) {
        self.prefix = prefix;
    }

    pub(crate) fn set_min_severity(&mut self, min_severity: Severity) {
        self.min_severity = min_severity;
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TAG, None, Severity::Debug)
    }
}

/// Namespaces `tag` with `prefix` (`"prefix/tag"`) if `prefix` is present and not empty
pub fn compose_tag(prefix: Option<&str>, tag: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}/{tag}"),
        _ => tag.to_string(),
    }
}

/// Prepends `message_prefix` (`"message_prefix: message"`) if it is present and not empty
pub fn compose_message(message_prefix: Option<&str>, message: &str) -> String {
    match message_prefix {
        Some(message_prefix) if !message_prefix.is_empty() => format!("{message_prefix}: {message}"),
        _ => message.to_string(),
    }
}
