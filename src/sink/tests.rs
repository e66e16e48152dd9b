use crate::error::SinkErrorKind;
use crate::severity::Severity;
use crate::sink::*;

#[derive(Debug, Default)]
struct FailingSink {
    attempts: usize,
}

impl Sink for FailingSink {
    fn write(&mut self, _record: &Record) -> Result<(), SinkError> {
        self.attempts += 1;

        Err(SinkError::unavailable("Native logging is stubbed"))
    }
}

fn captured_console() -> (ConsoleSink<SharedBuffer, SharedBuffer>, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();

    (ConsoleSink::with_writers(out.clone(), err.clone()), out, err)
}

#[test]
fn console_routes_debug_and_info_to_out() {
    let (mut sink, out, err) = captured_console();

    sink.write(&Record::new(Severity::Debug, "Net", "connecting")).unwrap();
    sink.write(&Record::new(Severity::Info, "Net", "ok")).unwrap();

    assert_eq!(out.contents(), "DEBUG [Net] connecting\nINFO [Net] ok\n");
    assert!(err.is_empty());
}

#[test]
fn console_routes_warning_and_error_to_err() {
    let (mut sink, out, err) = captured_console();

    sink.write(&Record::new(Severity::Warning, "Net", "slow")).unwrap();
    sink.write(&Record::new(Severity::Error, "App/DB", "SQL: fail")).unwrap();

    assert!(out.is_empty());
    assert_eq!(err.contents(), "WARN [Net] slow\nERROR [App/DB] SQL: fail\n");
}

#[test]
fn fallback_is_not_used_when_primary_succeeds() {
    let primary = MemorySink::new();
    let fallback = MemorySink::new();
    let mut sink = FallbackSink::new(primary.clone(), fallback.clone());

    sink.write(&Record::new(Severity::Info, "Net", "ok")).unwrap();

    assert_eq!(primary.lines(), ["INFO [Net] ok"]);
    assert!(fallback.is_empty());
}

#[test]
fn fallback_receives_record_once_when_primary_fails() {
    let fallback = MemorySink::new();
    let mut sink = FallbackSink::new(FailingSink::default(), fallback.clone());

    sink.write(&Record::new(Severity::Error, "Net", "down")).unwrap();
    sink.write(&Record::new(Severity::Info, "Net", "up")).unwrap();

    assert_eq!(sink.primary().attempts, 2);
    assert_eq!(fallback.lines(), ["ERROR [Net] down", "INFO [Net] up"]);
}

#[test]
fn fallback_error_is_reported_when_both_tiers_fail() {
    let mut sink = FallbackSink::new(FailingSink::default(), FailingSink::default());

    let err = sink.write(&Record::new(Severity::Info, "Net", "ok")).unwrap_err();

    assert_eq!(err.kind(), SinkErrorKind::Unavailable);
    assert_eq!(sink.fallback().attempts, 1);
}

#[test]
fn fallback_substitutes_console_format() {
    let (console, out, _err) = captured_console();
    let mut sink = FallbackSink::new(FailingSink::default(), console);

    sink.write(&Record::new(Severity::Info, "Net", "ok")).unwrap();

    assert_eq!(out.contents(), "INFO [Net] ok\n");
}

#[test]
fn memory_sink_clear() {
    let mut sink = MemorySink::new();

    sink.write(&Record::new(Severity::Info, "Net", "ok")).unwrap();
    assert!(!sink.is_empty());

    sink.clear();
    assert!(sink.is_empty());
}

#[test]
fn boxed_sink_delegates() {
    let memory = MemorySink::new();
    let mut sink: Box<dyn Sink> = Box::new(memory.clone());

    sink.write(&Record::new(Severity::Debug, "", "")).unwrap();
    sink.flush().unwrap();

    assert_eq!(memory.lines(), ["DEBUG [] "]);
}
