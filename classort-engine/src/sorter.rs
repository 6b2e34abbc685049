//! Token-level sorting helpers.
//!
//! These operate on the classes *inside* one string, not on argument
//! sequences; the sequence-level logic lives in `validator` and `planner`.

use crate::categories::classify;

/// Split a class-string on whitespace runs, dropping empties.
pub fn parse_classes(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Stable sort by category ordinal only; classes sharing a category keep
/// their input order. Idempotent.
pub fn sort_classes<'a>(classes: &[&'a str]) -> Vec<&'a str> {
    let mut sorted = classes.to_vec();
    sorted.sort_by_key(|class| classify(class).ordinal());
    sorted
}

/// Parse, sort, and re-join with single spaces.
pub fn sort_class_string(text: &str) -> String {
    sort_classes(&parse_classes(text)).join(" ")
}

/// True iff the string's classes are already weakly increasing by category.
pub fn is_class_string_in_order(text: &str) -> bool {
    let classes = parse_classes(text);
    classes
        .windows(2)
        .all(|pair| classify(pair[0]).ordinal() <= classify(pair[1]).ordinal())
}
