//! Error reporting for the Lox language
//!
//! Lexical errors never abort a scan. The scanner reports them through an
//! injected [`ErrorReporter`] and keeps going, so every scan returns a
//! well-formed token sequence.

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Sink for non-fatal diagnostics, injected into the scanner at construction.
pub trait ErrorReporter {
    /// Report an error at a 1-based source line.
    fn report(&mut self, line: usize, message: &str);
}

/// Reporter that prints formatted diagnostics to stderr.
pub struct ConsoleReporter {
    source: Option<String>,
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            source: None,
            had_error: false,
        }
    }

    /// Attach the source text so diagnostics can show the offending line.
    pub fn with_source(source: &str) -> Self {
        Self {
            source: Some(source.to_string()),
            had_error: false,
        }
    }

    /// Whether any error has been reported so far.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Reset the error flag (used between REPL lines).
    pub fn reset(&mut self) {
        self.had_error = false;
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for ConsoleReporter {
    fn report(&mut self, line: usize, message: &str) {
        self.had_error = true;
        let diagnostic = match &self.source {
            Some(source) => Diagnostic::with_source(line, message, source),
            None => Diagnostic::new(line, message),
        };
        eprintln!("{}", diagnostic);
    }
}

/// Reporter that buffers reports as data instead of printing them.
///
/// Used by tests to assert exactly which diagnostics a scan produced.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    reports: Vec<(usize, String)>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `(line, message)` pairs reported so far, in report order.
    pub fn reports(&self) -> &[(usize, String)] {
        &self.reports
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&mut self, line: usize, message: &str) {
        self.reports.push((line, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_reporter_preserves_order() {
        let mut reporter = CollectingReporter::new();
        reporter.report(1, "first");
        reporter.report(3, "second");

        assert_eq!(
            reporter.reports(),
            &[(1, "first".to_string()), (3, "second".to_string())]
        );
    }

    #[test]
    fn test_console_reporter_tracks_errors() {
        let mut reporter = ConsoleReporter::new();
        assert!(!reporter.had_error());

        reporter.report(1, "unexpected character '@'");
        assert!(reporter.had_error());

        reporter.reset();
        assert!(!reporter.had_error());
    }
}
