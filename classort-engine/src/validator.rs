//! Sequence validation: the misplaced-class pass and the ordering pass.

use crate::categories::{classify, classify_argument};
use crate::planner;
use crate::sorter::parse_classes;
use classort_types::{Category, Diagnostic, DiagnosticKind, Item, Sequence};

/// Outcome of validating one sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceReport {
    pub diagnostics: Vec<Diagnostic>,
    pub ordering_ok: bool,
}

/// Resolved category of one item: literals classify by their first token,
/// everything else is the dynamic sentinel.
pub fn item_category(item: &Item) -> Category {
    match item.literal_value() {
        Some(value) => classify_argument(value),
        None => Category::Dynamic,
    }
}

/// Weakly-increasing adjacent-pairs check. For a total order with ties this
/// is equivalent to full sortedness.
pub fn is_in_order(categories: &[Category]) -> bool {
    categories
        .windows(2)
        .all(|pair| pair[0].ordinal() <= pair[1].ordinal())
}

/// Validate one sequence against the canonical category order.
///
/// The misplaced-class pass runs first and unconditionally: a multi-token
/// literal is checked for internal consistency even when the sequence has a
/// single item or is already correctly ordered. The ordering pass is a no-op
/// for sequences of fewer than two items; otherwise an out-of-order sequence
/// yields exactly one ordering diagnostic carrying the planner's fix.
pub fn validate(sequence: &Sequence, source: &str) -> SequenceReport {
    let mut diagnostics = Vec::new();

    let categories: Vec<Category> = sequence.items.iter().map(item_category).collect();

    for (item, &declared) in sequence.items.iter().zip(&categories) {
        let Some(value) = item.literal_value() else {
            continue;
        };
        let tokens = parse_classes(value);
        if tokens.len() < 2 {
            continue;
        }
        for token in tokens {
            let resolved = classify(token);
            if resolved != declared {
                diagnostics.push(Diagnostic {
                    span: item.span,
                    kind: DiagnosticKind::MisplacedClass {
                        class_name: token.to_string(),
                        expected: resolved,
                        current: declared,
                    },
                    fix: None,
                });
            }
        }
    }

    if sequence.items.len() < 2 || is_in_order(&categories) {
        return SequenceReport {
            diagnostics,
            ordering_ok: true,
        };
    }

    if let Some(plan) = planner::plan(sequence, source) {
        diagnostics.push(Diagnostic {
            span: sequence.span,
            kind: DiagnosticKind::UnorderedSequence {
                expected: plan.expected,
            },
            fix: Some(plan.fix),
        });
    }

    SequenceReport {
        diagnostics,
        ordering_ok: false,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_in_order, item_category, validate};
    use classort_types::{
        Category, DiagnosticKind, Item, ItemKind, Sequence, SequenceOrigin, Span,
    };
    use pretty_assertions::assert_eq;

    fn literal(index: usize, span: Span, text: &str, value: &str) -> Item {
        Item {
            index,
            span,
            text: text.to_string(),
            kind: ItemKind::Literal {
                value: value.to_string(),
            },
        }
    }

    fn dynamic(index: usize, span: Span, text: &str) -> Item {
        Item {
            index,
            span,
            text: text.to_string(),
            kind: ItemKind::Dynamic,
        }
    }

    fn combiner(span: Span, items: Vec<Item>) -> Sequence {
        Sequence {
            span,
            origin: SequenceOrigin::CombinerArgs {
                callee: "cn".to_string(),
            },
            items,
        }
    }

    #[test]
    fn item_categories_resolve_per_kind() {
        let lit = literal(0, Span::new(0, 6), "\"flex\"", "flex");
        assert_eq!(item_category(&lit), Category::Layout);

        let dynamic = dynamic(1, Span::new(8, 16), "isActive");
        assert_eq!(item_category(&dynamic), Category::Dynamic);

        let empty = literal(2, Span::new(18, 22), "\"  \"", "  ");
        assert_eq!(item_category(&empty), Category::Custom);
    }

    #[test]
    fn in_order_allows_ties() {
        assert!(is_in_order(&[Category::Layout, Category::Layout]));
        assert!(is_in_order(&[
            Category::Layout,
            Category::Structure,
            Category::Dynamic
        ]));
        assert!(!is_in_order(&[Category::Structure, Category::Layout]));
        assert!(is_in_order(&[]));
        assert!(is_in_order(&[Category::Custom]));
    }

    #[test]
    fn ordered_sequence_is_clean() {
        let src = r#"cn("flex items-center", "w-4 h-4", "text-sm")"#;
        let seq = combiner(
            Span::new(0, src.len()),
            vec![
                literal(0, Span::new(3, 22), "\"flex items-center\"", "flex items-center"),
                literal(1, Span::new(24, 33), "\"w-4 h-4\"", "w-4 h-4"),
                literal(2, Span::new(35, 44), "\"text-sm\"", "text-sm"),
            ],
        );
        let report = validate(&seq, src);
        assert!(report.ordering_ok);
        assert_eq!(report.diagnostics, vec![]);
    }

    #[test]
    fn out_of_order_sequence_gets_one_fixable_diagnostic() {
        let src = r#"cn("w-4", "flex")"#;
        let seq = combiner(
            Span::new(0, src.len()),
            vec![
                literal(0, Span::new(3, 8), "\"w-4\"", "w-4"),
                literal(1, Span::new(10, 16), "\"flex\"", "flex"),
            ],
        );
        let report = validate(&seq, src);
        assert!(!report.ordering_ok);
        assert_eq!(report.diagnostics.len(), 1);
        let diag = &report.diagnostics[0];
        assert_eq!(diag.span, seq.span);
        match &diag.kind {
            DiagnosticKind::UnorderedSequence { expected } => {
                assert_eq!(expected, "Layout → Structure");
            }
            other => panic!("expected ordering diagnostic, got {other:?}"),
        }
        let fix = diag.fix.as_ref().expect("ordering fix");
        assert_eq!(fix.replacement, "\"flex\", \"w-4\"");
    }

    #[test]
    fn misplaced_class_fires_even_for_a_single_item() {
        let src = r#"cn("w-4 flex")"#;
        let seq = combiner(
            Span::new(0, src.len()),
            vec![literal(0, Span::new(3, 13), "\"w-4 flex\"", "w-4 flex")],
        );
        let report = validate(&seq, src);
        assert!(report.ordering_ok);
        assert_eq!(report.diagnostics.len(), 1);
        match &report.diagnostics[0].kind {
            DiagnosticKind::MisplacedClass {
                class_name,
                expected,
                current,
            } => {
                assert_eq!(class_name, "flex");
                assert_eq!(*expected, Category::Layout);
                assert_eq!(*current, Category::Structure);
            }
            other => panic!("expected misplaced class, got {other:?}"),
        }
        assert!(report.diagnostics[0].fix.is_none());
    }

    #[test]
    fn misplaced_pass_runs_alongside_ordering_pass() {
        let src = r#"cn("w-4 flex", "text-sm", "gap-2")"#;
        let seq = combiner(
            Span::new(0, src.len()),
            vec![
                literal(0, Span::new(3, 13), "\"w-4 flex\"", "w-4 flex"),
                literal(1, Span::new(15, 24), "\"text-sm\"", "text-sm"),
                literal(2, Span::new(26, 33), "\"gap-2\"", "gap-2"),
            ],
        );
        let report = validate(&seq, src);
        assert!(!report.ordering_ok);
        let misplaced: Vec<_> = report
            .diagnostics
            .iter()
            .filter(|d| matches!(d.kind, DiagnosticKind::MisplacedClass { .. }))
            .collect();
        let ordering: Vec<_> = report
            .diagnostics
            .iter()
            .filter(|d| matches!(d.kind, DiagnosticKind::UnorderedSequence { .. }))
            .collect();
        assert_eq!(misplaced.len(), 1);
        assert_eq!(ordering.len(), 1);
    }

    #[test]
    fn dynamic_after_literal_is_in_order() {
        let src = r#"cn("flex", isActive && "bg-blue-500")"#;
        let seq = combiner(
            Span::new(0, src.len()),
            vec![
                literal(0, Span::new(3, 9), "\"flex\"", "flex"),
                dynamic(1, Span::new(11, 36), r#"isActive && "bg-blue-500""#),
            ],
        );
        let report = validate(&seq, src);
        assert!(report.ordering_ok);
        assert_eq!(report.diagnostics, vec![]);
    }

    #[test]
    fn literal_after_dynamic_is_flagged() {
        let src = r#"cn(isActive && "flex", "text-sm")"#;
        let seq = combiner(
            Span::new(0, src.len()),
            vec![
                dynamic(0, Span::new(3, 21), r#"isActive && "flex""#),
                literal(1, Span::new(23, 32), "\"text-sm\"", "text-sm"),
            ],
        );
        let report = validate(&seq, src);
        assert!(!report.ordering_ok);
        let fix = report.diagnostics[0].fix.as_ref().expect("fix");
        assert_eq!(fix.replacement, r#""text-sm", isActive && "flex""#);
    }

    #[test]
    fn prefixed_tokens_validate_like_their_bare_forms() {
        let src = r#"cn("sm:w-4", "sm:flex")"#;
        let seq = combiner(
            Span::new(0, src.len()),
            vec![
                literal(0, Span::new(3, 11), "\"sm:w-4\"", "sm:w-4"),
                literal(1, Span::new(13, 22), "\"sm:flex\"", "sm:flex"),
            ],
        );
        let report = validate(&seq, src);
        assert!(!report.ordering_ok);
        let fix = report.diagnostics[0].fix.as_ref().expect("fix");
        assert_eq!(fix.replacement, r#""sm:flex", "sm:w-4""#);
    }

    #[test]
    fn empty_literals_never_enter_the_internal_check() {
        let src = r#"cn("   ", "flex")"#;
        let seq = combiner(
            Span::new(0, src.len()),
            vec![
                literal(0, Span::new(3, 8), "\"   \"", "   "),
                literal(1, Span::new(10, 16), "\"flex\"", "flex"),
            ],
        );
        let report = validate(&seq, src);
        // Empty literal is Custom (ordinal 9) and "flex" is Layout (1):
        // out of order, but no misplaced diagnostics.
        assert!(!report.ordering_ok);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(matches!(
            report.diagnostics[0].kind,
            DiagnosticKind::UnorderedSequence { .. }
        ));
    }

    #[test]
    fn zero_and_one_item_sequences_are_trivially_ordered() {
        let src = "cn()";
        let seq = combiner(Span::new(0, 4), vec![]);
        let report = validate(&seq, src);
        assert!(report.ordering_ok);
        assert!(report.diagnostics.is_empty());

        let src = r#"cn("w-4")"#;
        let seq = combiner(
            Span::new(0, src.len()),
            vec![literal(0, Span::new(3, 8), "\"w-4\"", "w-4")],
        );
        let report = validate(&seq, src);
        assert!(report.ordering_ok);
        assert!(report.diagnostics.is_empty());
    }
}
