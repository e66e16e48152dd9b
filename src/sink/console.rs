use std::fmt::Debug;
use std::io;
use std::io::Write;
use crate::error::SinkError;
use crate::record::Record;
use crate::sink::Sink;

/// This [Sink] prints `<LEVEL> [<tag>] <message>` lines
///
/// WARN and ERROR lines are written to the error writer, DEBUG and INFO lines to the output writer.
#[derive(Debug)]
pub struct ConsoleSink<O = io::Stdout, E = io::Stderr> {
    out: O,
    err: E,
}

impl ConsoleSink {
    /// Creates a sink which writes to the standard output and standard error streams
    pub fn stdio() -> Self {
        Self {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdio()
    }
}

impl<O, E> ConsoleSink<O, E>
where O: Write, E: Write {
    pub fn with_writers(out: O, err: E) -> Self {
        Self {
            out,
            err,
        }
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O, E> Sink for ConsoleSink<O, E>
where O: Write + Debug + Send, E: Write + Debug + Send {
    fn write(&mut self, record: &Record) -> Result<(), SinkError> {
        if record.severity().is_error_stream() {
            writeln!(self.err, "{record}")?;
            self.err.flush()?;
        }else {
            writeln!(self.out, "{record}")?;
            self.out.flush()?;
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.out.flush()?;
        self.err.flush()?;

        Ok(())
    }
}
