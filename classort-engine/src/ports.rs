//! Host-facing seam: diagnostics leave the engine through a sink.

use crate::validator;
use classort_types::{Diagnostic, Sequence};

/// Diagnostic-reporting sink.
///
/// The engine pushes findings here so hosts (CLI, editor integrations, tests)
/// can decide what a diagnostic becomes without the engine knowing about
/// files, processes, or output formats.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Validate one sequence and forward every finding to the sink.
/// Returns whether the sequence was already in order.
pub fn check_sequence(sequence: &Sequence, source: &str, sink: &mut dyn DiagnosticSink) -> bool {
    let report = validator::validate(sequence, source);
    for diagnostic in report.diagnostics {
        sink.report(diagnostic);
    }
    report.ordering_ok
}
