//! Diagnostic output and the flush-before-propagate error boundary.
//!
//! Errors raised while filling an option table are written to a
//! [`DiagnosticSink`] and the sink is flushed before the error is handed back,
//! so a caller that aborts right after never loses buffered output.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::error::SeaplaneError;

/// Destination for diagnostic lines.
pub trait DiagnosticSink {
    /// Write one line of text. The line carries no trailing newline.
    fn emit(&mut self, line: &str);

    /// Push out anything buffered so far.
    fn flush(&mut self);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn emit(&mut self, _line: &str) {}

    fn flush(&mut self) {}
}

/// Writes lines to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        let mut out = io::stdout().lock();
        // stdout going away is not something a diagnostic can report
        let _ = writeln!(out, "{}", line);
    }

    fn flush(&mut self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

/// In-memory sink. Clones share the same buffer, so one handle can be given
/// to a parser and another kept for inspection.
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    inner: Rc<RefCell<BufferState>>,
}

#[derive(Debug, Default)]
struct BufferState {
    pending: Vec<String>,
    flushed: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that have been emitted and flushed
    pub fn flushed_lines(&self) -> Vec<String> {
        self.inner.borrow().flushed.clone()
    }

    /// Lines emitted since the last flush
    pub fn pending_lines(&self) -> Vec<String> {
        self.inner.borrow().pending.clone()
    }
}

impl DiagnosticSink for BufferSink {
    fn emit(&mut self, line: &str) {
        self.inner.borrow_mut().pending.push(line.to_owned());
    }

    fn flush(&mut self) {
        let mut state = self.inner.borrow_mut();
        let pending = std::mem::take(&mut state.pending);
        state.flushed.extend(pending);
    }
}

/// Error-reporting boundary owning a sink.
pub struct Reporter {
    sink: Box<dyn DiagnosticSink>,
}

impl Reporter {
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Reporter {
            sink: Box::new(sink),
        }
    }

    pub fn silent() -> Self {
        Self::new(SilentSink)
    }

    /// Emit an informational line.
    pub fn note(&mut self, line: &str) {
        self.sink.emit(line);
    }

    /// Report `err`, flush the sink and give the error back for propagation.
    pub fn raise(&mut self, err: SeaplaneError) -> SeaplaneError {
        self.sink.emit(&err.to_string());
        self.sink.flush();
        err
    }

    /// Route the error of `result`, if any, through [`Reporter::raise`].
    #[inline]
    pub fn check<T>(&mut self, result: Result<T, SeaplaneError>) -> Result<T, SeaplaneError> {
        result.map_err(|e| self.raise(e))
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::silent()
    }
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_flush() {
        let mut sink = BufferSink::new();
        let view = sink.clone();
        sink.emit("one");
        assert_eq!(view.pending_lines(), ["one"]);
        assert!(view.flushed_lines().is_empty());
        sink.flush();
        assert_eq!(view.flushed_lines(), ["one"]);
        assert!(view.pending_lines().is_empty());
    }

    #[test]
    fn test_raise_flushes_before_returning() {
        let view = BufferSink::new();
        let mut reporter = Reporter::new(view.clone());
        reporter.note("working");
        let err = reporter.raise(SeaplaneError::UnknownOption("-foo".into()));
        assert_eq!(err, SeaplaneError::UnknownOption("-foo".into()));
        assert_eq!(view.flushed_lines(), ["working", "Unexpected option: -foo"]);
        assert!(view.pending_lines().is_empty());
    }
}
