//! Formatting macros for [DailyLogger](crate::logger::DailyLogger) and [SharedLogger](crate::shared::SharedLogger)
//!
//! The message is only rendered if the severity passes the configured minimum.
//! A tag override and a message prefix can be given with `tag = ` and `prefix = ` (in this order):
//!
//! ```ignore
//! log_error!(logger, tag = "DB", prefix = "SQL", "query {} failed", id);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log_with_severity {
    ( $severity:ident, $logger:expr, tag = $tag:expr, prefix = $prefix:expr, $($arg:tt)+ ) => {
        $logger.logf_with($crate::severity::Severity::$severity, ::std::option::Option::Some($tag), ::std::option::Option::Some($prefix), ::std::format_args!($($arg)+))
    };

    ( $severity:ident, $logger:expr, tag = $tag:expr, $($arg:tt)+ ) => {
        $logger.logf_with($crate::severity::Severity::$severity, ::std::option::Option::Some($tag), ::std::option::Option::None, ::std::format_args!($($arg)+))
    };

    ( $severity:ident, $logger:expr, prefix = $prefix:expr, $($arg:tt)+ ) => {
        $logger.logf_with($crate::severity::Severity::$severity, ::std::option::Option::None, ::std::option::Option::Some($prefix), ::std::format_args!($($arg)+))
    };

    ( $severity:ident, $logger:expr, $($arg:tt)+ ) => {
        $logger.logf($crate::severity::Severity::$severity, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_debug {
    ( $logger:expr, $($arg:tt)+ ) => {
        $crate::__log_with_severity!(Debug, $logger, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    ( $logger:expr, $($arg:tt)+ ) => {
        $crate::__log_with_severity!(Info, $logger, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    ( $logger:expr, $($arg:tt)+ ) => {
        $crate::__log_with_severity!(Warning, $logger, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    ( $logger:expr, $($arg:tt)+ ) => {
        $crate::__log_with_severity!(Error, $logger, $($arg)+)
    };
}
