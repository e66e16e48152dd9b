use daily_logger::sink::{ConsoleSink, FallbackSink, SharedBuffer};
use daily_logger::{log_debug, log_error, log_info, log_warning};
use daily_logger::{DailyLogger, LogCall, LoggerConfig, Record, Severity, Sink, SinkError, SharedLogger};

fn console_logger(config: LoggerConfig) -> (DailyLogger, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let sink = ConsoleSink::with_writers(out.clone(), err.clone());

    (DailyLogger::new(config, Box::new(sink)), out, err)
}

#[test]
fn info_goes_to_standard_stream() {
    let (mut logger, out, err) = console_logger(LoggerConfig::default().with_tag("Net"));

    logger.info("ok", None, None);

    assert_eq!(out.contents(), "INFO [Net] ok\n");
    assert!(err.is_empty());
}

#[test]
fn below_minimum_produces_no_output() {
    let (mut logger, out, err) = console_logger(LoggerConfig::default().with_min_severity(Severity::Warning));

    logger.debug("x", None, None);
    logger.info("x", None, None);

    assert!(out.is_empty());
    assert!(err.is_empty());
}

#[test]
fn prefixed_error_goes_to_error_stream() {
    let (mut logger, out, err) = console_logger(LoggerConfig::default().with_tag("DB").with_prefix("App"));

    logger.error("fail", None, Some("SQL"));

    assert!(out.is_empty());
    assert_eq!(err.contents(), "ERROR [App/DB] SQL: fail\n");
}

#[test]
fn per_call_tag_override() {
    let (mut logger, out, _err) = console_logger(LoggerConfig::default().with_tag("App"));

    logger.info("connected", Some("Database"), None);
    logger.emit(&LogCall::new(Severity::Info, "ready").with_tag("Cache"));
    logger.info("idle", None, None);

    assert_eq!(out.contents(), "INFO [Database] connected\nINFO [Cache] ready\nINFO [App] idle\n");
}

#[test]
fn empty_tag_and_empty_prefix() {
    let (mut logger, out, err) = console_logger(LoggerConfig::default().with_tag("").with_prefix(""));

    logger.info("", None, None);
    logger.warning("careful", None, None);

    assert_eq!(out.contents(), "INFO [] \n");
    assert_eq!(err.contents(), "WARN [] careful\n");
}

#[test]
fn unicode_and_long_messages_are_unmodified() {
    let (mut logger, out, _err) = console_logger(LoggerConfig::default().with_tag("T"));
    let unicode_message = "naïve café 東京 🎌";
    let long_message = "0123456789".repeat(20);

    logger.info(unicode_message, None, None);
    logger.info(&long_message, None, None);

    let contents = out.contents();
    let lines = contents.lines().collect::<Vec<_>>();
    assert_eq!(lines[0].strip_prefix("INFO [T] ").unwrap().as_bytes(), unicode_message.as_bytes());
    assert_eq!(lines[1].strip_prefix("INFO [T] ").unwrap().len(), 200);
}

#[test]
fn macros_format_messages() {
    let (mut logger, out, err) = console_logger(LoggerConfig::default().with_tag("Net"));

    log_debug!(logger, "attempt {}", 1);
    log_info!(logger, tag = "Http", "status {}", 200);
    log_warning!(logger, "retrying in {}s", 5);
    log_error!(logger, tag = "Http", "status {}", 503);

    assert_eq!(out.contents(), "DEBUG [Net] attempt 1\nINFO [Http] status 200\n");
    assert_eq!(err.contents(), "WARN [Net] retrying in 5s\nERROR [Http] status 503\n");
}

#[test]
fn macros_accept_message_prefix() {
    let (mut logger, out, err) = console_logger(LoggerConfig::default().with_tag("DB").with_prefix("App"));

    log_info!(logger, prefix = "SQL", "{} rows", 3);
    log_error!(logger, tag = "Pool", prefix = "SQL", "query {} failed", 7);

    assert_eq!(out.contents(), "INFO [App/DB] SQL: 3 rows\n");
    assert_eq!(err.contents(), "ERROR [App/Pool] SQL: query 7 failed\n");
}

#[test]
fn macros_work_with_shared_logger() {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let logger = SharedLogger::new(DailyLogger::with_sink(ConsoleSink::with_writers(out.clone(), err.clone())));

    log_info!(logger, "shared {}", "handle");
    logger.set_min_severity(Severity::Error);
    log_warning!(logger, "dropped");

    assert_eq!(out.contents(), "INFO [DailyLogger] shared handle\n");
    assert!(err.is_empty());
}

#[derive(Debug)]
struct StubbedNativeSink;

impl Sink for StubbedNativeSink {
    fn write(&mut self, _record: &Record) -> Result<(), SinkError> {
        Err(SinkError::unavailable("native logging is not linked"))
    }
}

#[test]
fn native_failure_falls_back_to_console_format() {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let sink = FallbackSink::new(StubbedNativeSink, ConsoleSink::with_writers(out.clone(), err.clone()));
    let mut logger = DailyLogger::new(LoggerConfig::default().with_tag("DB").with_prefix("App"), Box::new(sink));

    logger.info("ready", None, None);
    logger.error("fail", None, Some("SQL"));

    assert_eq!(out.contents(), "INFO [App/DB] ready\n");
    assert_eq!(err.contents(), "ERROR [App/DB] SQL: fail\n");
}
