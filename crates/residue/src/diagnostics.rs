//! Diagnostics sink for non-fatal inspection problems

use std::cell::RefCell;

use crate::value::Value;

/// Receives non-fatal problems found while inspecting the heap.
///
/// Reporting never aborts the pass; the inspector falls back to retaining
/// whatever it could not reason about.
pub trait Diagnostics {
    /// Report an unsupported construct on `subject`.
    fn log_error(&self, subject: &Value, message: &str);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl Diagnostics for LogSink {
    fn log_error(&self, subject: &Value, message: &str) {
        log::error!(target: "residue::diagnostics", "{:?}: {}", subject, message);
    }
}

/// A single reported problem.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The value the problem was found on
    pub subject: Value,

    /// What went wrong
    pub message: String,
}

/// Records diagnostics for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    /// Get the number of reported diagnostics.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Diagnostics for CollectingSink {
    fn log_error(&self, subject: &Value, message: &str) {
        self.entries.borrow_mut().push(Diagnostic {
            subject: subject.clone(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_records_in_order() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.log_error(&Value::Number(1.0), "first");
        sink.log_error(&Value::Null, "second");

        let entries = sink.entries();
        assert_eq!(sink.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].subject, Value::Null);
    }

    #[test]
    fn test_log_sink_accepts_reports() {
        LogSink.log_error(&Value::Undefined, "ignored without a logger");
    }
}
