use crate::category::Category;
use crate::item::Span;
use serde::{Deserialize, Serialize};

/// A textual rewrite: replace the span with `replacement`, leave everything
/// outside it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub span: Span,
    pub replacement: String,
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The sequence's category ordinals are not non-decreasing. Reported once
    /// per sequence; `expected` is the proposed category order, names joined
    /// with " → ".
    UnorderedSequence { expected: String },
    /// A token inside a multi-token literal belongs to a different category
    /// than the literal's first token. Report-only; never carries a fix.
    MisplacedClass {
        class_name: String,
        expected: Category,
        current: Category,
    },
}

impl DiagnosticKind {
    /// Stable message identifier for renderers and the JSON report.
    pub fn message_id(&self) -> &'static str {
        match self {
            DiagnosticKind::UnorderedSequence { .. } => "unordered_sequence",
            DiagnosticKind::MisplacedClass { .. } => "misplaced_class",
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        match self {
            DiagnosticKind::UnorderedSequence { expected } => {
                format!("class categories are out of order (expected: {expected})")
            }
            DiagnosticKind::MisplacedClass {
                class_name,
                expected,
                current,
            } => format!(
                "'{class_name}' belongs to the {expected} category but sits in a {current} group"
            ),
        }
    }
}

/// One finding, anchored to a span of the scanned source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Anchor: the offending item for misplaced classes, the whole container
    /// for ordering violations.
    pub span: Span,
    pub kind: DiagnosticKind,

    /// Corrective rewrite, present on ordering diagnostics only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}
