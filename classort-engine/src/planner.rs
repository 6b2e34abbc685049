//! Reorder planning: given an out-of-order sequence, compute the canonical
//! permutation and the replacement text.

use crate::validator::item_category;
use classort_types::{Fix, Sequence, Span};

/// Joiner of last resort when a gap has no recoverable separator.
pub const DEFAULT_SEPARATOR: &str = ",\n        ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderPlan {
    /// Original indices in proposed order.
    pub order: Vec<usize>,
    /// Proposed category sequence, names joined with " → ".
    pub expected: String,
    pub fix: Fix,
}

/// Plan the canonical rewrite for a sequence.
///
/// Deterministic: stable sort by (category ordinal, original index), so items
/// sharing a category never move relative to each other. Separators between
/// items are recycled by gap position (the slice of source between the end
/// of one original item and the start of the next), so only item order
/// changes, not formatting. Returns `None` for sequences of fewer than two
/// items (nothing to reorder).
pub fn plan(sequence: &Sequence, source: &str) -> Option<ReorderPlan> {
    let items = &sequence.items;
    if items.len() < 2 {
        return None;
    }

    let ordinals: Vec<u8> = items
        .iter()
        .map(|item| item_category(item).ordinal())
        .collect();

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| (ordinals[i], i));

    let separators: Vec<Option<&str>> = items
        .windows(2)
        .map(|pair| Span::new(pair[0].span.end, pair[1].span.start).slice(source))
        .collect();

    let mut replacement = String::new();
    for (position, &index) in order.iter().enumerate() {
        if position > 0 {
            let separator = separators
                .get(position - 1)
                .copied()
                .flatten()
                .unwrap_or(DEFAULT_SEPARATOR);
            replacement.push_str(separator);
        }
        replacement.push_str(&items[index].text);
    }

    let expected = order
        .iter()
        .map(|&i| item_category(&items[i]).name())
        .collect::<Vec<_>>()
        .join(" → ");

    let span = Span::new(items[0].span.start, items[items.len() - 1].span.end);
    Some(ReorderPlan {
        order,
        expected,
        fix: Fix { span, replacement },
    })
}
