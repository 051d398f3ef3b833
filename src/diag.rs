//! Observational hook for decode diagnostics.
//!
//! A decoder reports wire values that it accepts but cannot fully interpret, for example
//! spare enumeration values, skipped extension groups or a `criticalExtensionsFuture`.
//! Reporting never changes the outcome of the decode.

/// Receives human-readable diagnostics as `(context, text)`, where the context names the
/// information element that was being decoded.
pub trait DiagnosticSink {
    fn diagnostic(&self, context: &str, text: &str);
}

impl<F: Fn(&str, &str)> DiagnosticSink for F {
    #[inline]
    fn diagnostic(&self, context: &str, text: &str) {
        self(context, text)
    }
}

/// Discards every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    #[inline]
    fn diagnostic(&self, _context: &str, _text: &str) {}
}

/// Forwards every diagnostic as `tracing` event on the debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn diagnostic(&self, context: &str, text: &str) {
        tracing::debug!(target: "lte_rrc::diag", context, "{}", text);
    }
}

/// Collects all diagnostics, mostly useful to assert on them
#[derive(Debug, Default)]
pub struct CollectingSink(std::cell::RefCell<Vec<(String, String)>>);

impl CollectingSink {
    pub fn take(&self) -> Vec<(String, String)> {
        self.0.take()
    }

    pub fn contains(&self, context: &str) -> bool {
        self.0.borrow().iter().any(|(c, _)| c == context)
    }
}

impl DiagnosticSink for CollectingSink {
    fn diagnostic(&self, context: &str, text: &str) {
        self.0
            .borrow_mut()
            .push((context.to_string(), text.to_string()));
    }
}

pub(crate) static NOOP: NoopSink = NoopSink;

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_closure_is_a_sink() {
        let calls = Cell::new(0);
        let sink = |context: &str, text: &str| {
            assert_eq!("PCCH-Message", context);
            assert!(!text.is_empty());
            calls.set(calls.get() + 1);
        };
        sink.diagnostic("PCCH-Message", "spare value");
        assert_eq!(1, calls.get());
    }

    #[test]
    fn test_collecting_sink() {
        let sink = CollectingSink::default();
        sink.diagnostic("MIB", "spare bits set");
        assert!(sink.contains("MIB"));
        assert_eq!(
            vec![("MIB".to_string(), "spare bits set".to_string())],
            sink.take()
        );
        assert!(!sink.contains("MIB"));
    }
}
