//! The category pattern table.
//!
//! Classification is a pure function of a token's text. The table is built
//! once and shared; its order encodes pattern precedence (a token that could
//! match several categories gets the first one in table order: e.g. the
//! width-only border forms sit in Structure and must win over Style's
//! `border-<color>` catch-all, which holds because Structure precedes Style).
//! Reordering entries changes behavior; keep the table as designed.

use classort_types::Category;
use regex::Regex;
use std::sync::LazyLock;

/// Responsive/theme markers stripped before classification. One or more may
/// be stacked in any order (`dark:sm:flex`, `sm:dark:flex`).
const VARIANT_PREFIXES: &[&str] = &["sm:", "md:", "lg:", "xl:", "2xl:", "dark:"];

struct CategoryRule {
    category: Category,
    patterns: Vec<Regex>,
}

fn rule(category: Category, patterns: &[&str]) -> CategoryRule {
    CategoryRule {
        category,
        patterns: patterns
            .iter()
            .map(|p| Regex::new(p).expect("static category pattern"))
            .collect(),
    }
}

static RULES: LazyLock<Vec<CategoryRule>> = LazyLock::new(|| {
    vec![
        rule(Category::Marker, &[r"^group$", r"^peer$"]),
        rule(
            Category::Layout,
            &[
                r"^(static|fixed|absolute|relative|sticky)$",
                r"^container$",
                r"^(block|inline-block|inline|flex|inline-flex|table|inline-table|grid|inline-grid)$",
                r"^table-(caption|cell|column|column-group|footer-group|header-group|row-group|row)$",
                r"^(contents|flow-root|list-item|hidden)$",
                r"^flex-(row|row-reverse|col|col-reverse|wrap|wrap-reverse|nowrap)$",
                r"^grid-(cols|rows)-",
                r"^grid-flow-(row|col|dense|row-dense|col-dense)$",
                r"^auto-(cols|rows)-",
                r"^(items|justify|gap|place|content|self)-",
                r"^columns-",
                r"^(order|col|row)-",
            ],
        ),
        rule(
            Category::Structure,
            &[
                r"^(?:min-|max-)?(?:w|h|size)-",
                r"^box-(?:border|content)$",
                r"^-?[mp][xytrbl]?-",
                r"^space-[xy]-",
                r"^(?:top|right|bottom|left|inset)-",
                r"^z-",
                r"^border(?:-[trblxyse])?(?:-(?:\d+|\[[^\]]+]))?$",
                r"^border(?:-[trblxyse])?-(?:solid|dashed|dotted|double|none)$",
                r"^border-(?:collapse|separate)$",
                r"^border-spacing-",
                r"^(?:float|clear|overflow|overscroll|aspect|object|basis)-",
                r"^flex-(?:shrink|grow)",
                r"^flex-(?:1|auto|initial|none)$",
                r"^(?:shrink|grow)(?:-|$)",
                r"^(?:visible|invisible|collapse)$",
            ],
        ),
        rule(
            Category::Style,
            &[
                r"^(?:typography|font|text|leading|tracking|line-clamp)-",
                r"^(?:whitespace|break)-",
                r"^(?:truncate|underline|overline|line-through|no-underline)$",
                r"^(?:bg|from|via|to|gradient)-",
                r"^rounded(?:-[trblxy])?(?:-|$)",
                r"^border-(?:[a-z]+|\[[^\]]+])",
                r"^(?:shadow|drop-shadow|opacity|ring|divide|fill|stroke|decoration)-",
                r"^(?:caret|accent|appearance|outline|will-change)-",
                r"^(?:filter|blur|brightness|contrast|grayscale|hue-rotate)-",
                r"^(?:invert|saturate|sepia|backdrop|mix-blend|bg-blend|isolation|isolate)",
                r"^(?:cursor|select|scroll|snap|touch|resize|pointer-events)-",
            ],
        ),
        rule(
            Category::Transition,
            &[
                r"^(?:transition|animate|duration|ease|delay)(?:-|$)",
                r"^(?:rotate|scale|translate|skew|origin|transform)(?:-|$)",
            ],
        ),
        rule(
            Category::Interaction,
            &[r"^(?:hover|focus|focus-within|focus-visible):"],
        ),
        rule(
            Category::State,
            &[
                r"^(?:active|disabled|enabled|checked|indeterminate|default|required):",
                r"^(?:valid|invalid|in-range|out-of-range|placeholder-shown):",
                r"^(?:autofill|read-only|open):",
                r"^(?:group|peer)-(?:hover|focus|active|disabled|checked|aria-selected):",
                r"^(?:first|last|only|odd|even|first-of-type):",
                r"^(?:last-of-type|empty|target|visited):",
            ],
        ),
        rule(
            Category::Accessibility,
            &[r"^aria-", r"^sr-only$", r"^not-sr-only$"],
        ),
    ]
});

/// Remove any leading run of recognized variant prefixes.
pub fn strip_variant_prefixes(token: &str) -> &str {
    let mut rest = token;
    'outer: loop {
        for prefix in VARIANT_PREFIXES {
            if let Some(stripped) = rest.strip_prefix(prefix) {
                rest = stripped;
                continue 'outer;
            }
        }
        return rest;
    }
}

/// Category of a single token. Total: unrecognized tokens are `Custom`.
pub fn classify(token: &str) -> Category {
    let target = strip_variant_prefixes(token);
    for rule in RULES.iter() {
        if rule.patterns.iter().any(|p| p.is_match(target)) {
            return rule.category;
        }
    }
    Category::Custom
}

/// Category of a whole class-string: the category of its first token, or
/// `Custom` when the string holds no tokens at all.
pub fn classify_argument(text: &str) -> Category {
    match text.split_whitespace().next() {
        Some(first) => classify(first),
        None => Category::Custom,
    }
}
