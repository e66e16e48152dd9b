use crate::error::SinkError;
use crate::record::Record;
use crate::sink::Sink;

/// Two-tier [Sink]: every record goes to the primary sink and, if that fails, once to the fallback
#[derive(Debug)]
pub struct FallbackSink<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackSink<P, F>
where P: Sink, F: Sink {
    pub fn new(primary: P, fallback: F) -> Self {
        Self {
            primary,
            fallback,
        }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    pub fn into_inner(self) -> (P, F) {
        (self.primary, self.fallback)
    }
}

impl<P, F> Sink for FallbackSink<P, F>
where P: Sink, F: Sink {
    fn write(&mut self, record: &Record) -> Result<(), SinkError> {
        match self.primary.write(record) {
            Ok(()) => Ok(()),
            Err(_) => self.fallback.write(record),
        }
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        let primary = self.primary.flush();
        let fallback = self.fallback.flush();

        primary.and(fallback)
    }
}
