use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SinkErrorKind {
    /// The native logging primitive does not exist in the current environment
    Unavailable,
    /// The message can not be represented by the native logging primitive
    InvalidMessage,
    /// Writing to the underlying stream or file failed
    Io,
}

impl SinkErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            SinkErrorKind::Unavailable => "Sink unavailable",
            SinkErrorKind::InvalidMessage => "Invalid message",
            SinkErrorKind::Io => "I/O error",
        }
    }
}

/// Failure reported by a [Sink](crate::sink::Sink)
///
/// These errors never reach the caller of the logger: they are consumed by a
/// [FallbackSink](crate::sink::FallbackSink) or discarded by the logger itself.
#[derive(Debug)]
pub struct SinkError {
    kind: SinkErrorKind,
    message: String,
    cause: Option<Box<dyn Error + Send + Sync>>,
}

impl SinkError {
    pub fn new(kind: SinkErrorKind, message: &str) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn from_error_with_message<E>(kind: SinkErrorKind, message: &str, cause: E) -> Self
    where E: Error + Send + Sync + 'static {
        Self {
            kind,
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    pub fn unavailable(message: &str) -> Self {
        Self::new(SinkErrorKind::Unavailable, message)
    }

    pub fn kind(&self) -> SinkErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync)> {
        self.cause.as_deref()
    }
}

impl From<io::Error> for SinkError {
    fn from(value: io::Error) -> Self {
        Self::from_error_with_message(SinkErrorKind::Io, "Write failed", value)
    }
}

impl Display for SinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(cause) = &self.cause {
            write!(f, "{}: {}\nCaused by:\n{}", self.kind.name(), &self.message, cause)
        }else {
            write!(f, "{}: {}", self.kind.name(), &self.message)
        }
    }
}

impl Error for SinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Returned when a string does not name a [Severity](crate::severity::Severity)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for ParseSeverityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid severity \"{}\" (expected one of DEBUG, INFO, WARN, ERROR)", &self.input)
    }
}

impl Error for ParseSeverityError {}
