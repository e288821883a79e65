//! Destinations for reported violations.

use crate::types::{LintResult, Violation};

/// Receives violations from the [`Checker`](crate::Checker).
///
/// Reports arrive in the order rules produced them. A sink shared between
/// threads is responsible for serializing its own reports.
pub trait DiagnosticSink {
    /// Records one violation.
    fn report(&mut self, violation: Violation);
}

impl DiagnosticSink for Vec<Violation> {
    fn report(&mut self, violation: Violation) {
        self.push(violation);
    }
}

impl DiagnosticSink for LintResult {
    fn report(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, violation: Violation) {
        (**self).report(violation);
    }
}
