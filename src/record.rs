
use std::fmt::{Display, Formatter};
use crate::config::{self, LoggerConfig};
use crate::severity::Severity;

/// The arguments of a single logging call
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LogCall<'a> {
    severity: Severity,
    message: &'a str,
    tag: Option<&'a str>,
    message_prefix: Option<&'a str>,
}

impl<'a> LogCall<'a> {
    pub fn new(severity: Severity, message: &'a str) -> Self {
        Self {
            severity,
            message,
            tag: None,
            message_prefix: None,
        }
    }

    /// Overrides the configured default tag for this call only
    pub fn with_tag(self, tag: &'a str) -> Self {
        Self {
            tag: Some(tag),
            ..self
        }
    }

    pub fn with_message_prefix(self, message_prefix: &'a str) -> Self {
        Self {
            message_prefix: Some(message_prefix),
            ..self
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &'a str {
        self.message
    }

    pub fn tag(&self) -> Option<&'a str> {
        self.tag
    }

    pub fn message_prefix(&self) -> Option<&'a str> {
        self.message_prefix
    }
}

/// A fully composed line as it is handed to a [Sink](crate::sink::Sink)
///
/// The [Display] implementation renders the console format `<LEVEL> [<tag>] <message>`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Record {
    severity: Severity,
    tag: String,
    message: String,
}

impl Record {
    pub fn new(severity: Severity, tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            tag: tag.into(),
            message: message.into(),
        }
    }

    /// Filters `call` against `config` and composes the final tag and message
    ///
    /// Returns [None] if the severity of the call is below the configured minimum.
    pub fn compose(config: &LoggerConfig, call: &LogCall<'_>) -> Option<Self> {
        if !call.severity.should_log(config.min_severity()) {
            return None;
        }

        let tag = call.tag.unwrap_or(config.tag());

        Some(Self {
            severity: call.severity,
            tag: config::compose_tag(config.prefix(), tag),
            message: config::compose_message(call.message_prefix, call.message),
        })
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders `<marker> [<tag>] <message>` with the [marker](Severity::marker) of the severity
    pub fn to_marked_string(&self) -> String {
        format!("{} [{}] {}", self.severity.marker(), &self.tag, &self.message)
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.severity.label(), &self.tag, &self.message)
    }
}
