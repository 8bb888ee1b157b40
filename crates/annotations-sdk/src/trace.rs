/// Sink for the reporter's diagnostics (progress notes, the missing-jobs
/// error). The report itself is written elsewhere.
pub trait TraceWriter: Send + Sync {
    fn info(&self, message: &str);

    /// Detail only shown when debug output is enabled.
    fn verbose(&self, message: &str);

    fn error(&self, message: &str);
}

/// Forwards diagnostics to `tracing`; `verbose` maps to `debug!`.
#[derive(Debug, Clone)]
pub struct TracingTraceWriter;

impl TraceWriter for TracingTraceWriter {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn verbose(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Level a [`CollectingTraceWriter`] recorded a message at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLevel {
    Info,
    Verbose,
    Error,
}

/// Keeps every diagnostic in memory so tests can assert on it.
#[derive(Debug, Default)]
pub struct CollectingTraceWriter {
    entries: parking_lot::Mutex<Vec<(TraceLevel, String)>>,
}

impl CollectingTraceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded at `level`, oldest first.
    pub fn messages_at(&self, level: TraceLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn record(&self, level: TraceLevel, message: &str) {
        self.entries.lock().push((level, message.to_owned()));
    }
}

impl TraceWriter for CollectingTraceWriter {
    fn info(&self, message: &str) {
        self.record(TraceLevel::Info, message);
    }

    fn verbose(&self, message: &str) {
        self.record(TraceLevel::Verbose, message);
    }

    fn error(&self, message: &str) {
        self.record(TraceLevel::Error, message);
    }
}
