
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::error::ParseSeverityError;

/// Ordered log severity
///
/// The rank of a severity is only ever used for comparisons against the configured minimum.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    #[default]
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl Severity {
    pub const VALUES: [Self; 4] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
    ];

    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// The label printed in front of console lines
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }

    /// The decorative marker which replaces the label in system log lines
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Debug => "💬",
            Severity::Info => "ℹ️",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
        }
    }

    /// Returns true if a message of this severity passes the `min_severity` threshold
    pub fn should_log(&self, min_severity: Severity) -> bool {
        self.rank() >= min_severity.rank()
    }

    /// Returns true if console output of this severity belongs on the error stream
    pub fn is_error_stream(&self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        Self::VALUES.into_iter().
                find(|severity| {
                    trimmed.eq_ignore_ascii_case(severity.label()) ||
                            trimmed.eq_ignore_ascii_case(severity.name()) ||
                            trimmed == severity.rank().to_string()
                }).
                ok_or_else(|| ParseSeverityError::new(s))
    }
}
