//! Call-site extraction: identifier matching, argument splitting, item
//! shaping, and `variants`-map discovery for builder calls.

use crate::lexer::{
    is_ident_char, matching_bracket, skip_noncode, skip_string, skip_template, split_top_level,
    trim_span,
};
use classort_types::{Item, ItemKind, Sequence, SequenceOrigin, Span};
use tracing::debug;

/// Which callee names are treated as the combiner / variant builder.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub combiners: Vec<String>,
    pub builders: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            combiners: vec!["cn".to_string()],
            builders: vec!["cva".to_string()],
        }
    }
}

/// Find every combiner/builder call site in `source` and extract its
/// sequences. Deterministic: sequences come back in source order. Never
/// fails; malformed candidates are dropped.
pub fn scan_source(source: &str, config: &ScanConfig) -> Vec<Sequence> {
    let bytes = source.as_bytes();
    let mut sequences = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if let Some(end) = skip_noncode(bytes, i) {
            i = end.max(i + 1);
            continue;
        }
        if !is_ident_char(bytes[i]) {
            i += 1;
            continue;
        }

        // Identifier head only: neither a member access nor a longer name.
        let preceded = i > 0 && (is_ident_char(bytes[i - 1]) || bytes[i - 1] == b'.');
        let mut j = i;
        while j < bytes.len() && is_ident_char(bytes[j]) {
            j += 1;
        }
        let name = &source[i..j];

        if preceded {
            i = j;
            continue;
        }

        let is_combiner = config.combiners.iter().any(|c| c == name);
        let is_builder = config.builders.iter().any(|b| b == name);
        if !is_combiner && !is_builder {
            i = j;
            continue;
        }

        let mut k = j;
        while k < bytes.len() && bytes[k].is_ascii_whitespace() {
            k += 1;
        }
        if bytes.get(k) != Some(&b'(') {
            i = j;
            continue;
        }
        let Some(close) = matching_bracket(bytes, k) else {
            debug!(callee = name, offset = i, "unterminated call; skipping");
            i = j;
            continue;
        };

        let call_span = Span::new(i, close + 1);
        let args_span = Span::new(k + 1, close);
        debug!(callee = name, start = i, end = close + 1, "call site");

        if is_combiner {
            let parts = split_top_level(source, args_span, b',');
            sequences.push(sequence_from_parts(
                source,
                call_span,
                &parts,
                SequenceOrigin::CombinerArgs {
                    callee: name.to_string(),
                },
            ));
        } else {
            sequences.extend(builder_sequences(source, name, args_span));
        }

        // Resume just past the identifier so nested call sites inside the
        // arguments are still visited.
        i = j;
    }

    sequences
}

/// Sequences contributed by one builder call: the base array (when the first
/// argument is an array literal) plus every array under the option map's
/// `variants` key.
fn builder_sequences(source: &str, callee: &str, args_span: Span) -> Vec<Sequence> {
    let bytes = source.as_bytes();
    let args = split_top_level(source, args_span, b',');
    let mut sequences = Vec::new();

    if let Some(base) = args.first() {
        let base = trim_span(source, *base);
        if bytes.get(base.start) == Some(&b'[') {
            if let Some(close) = matching_bracket(bytes, base.start) {
                if close + 1 == base.end {
                    let elements =
                        split_top_level(source, Span::new(base.start + 1, close), b',');
                    sequences.push(sequence_from_parts(
                        source,
                        base,
                        &elements,
                        SequenceOrigin::BuilderBase {
                            callee: callee.to_string(),
                        },
                    ));
                }
            }
        }
    }

    if let Some(options) = args.get(1) {
        let options = trim_span(source, *options);
        if bytes.get(options.start) == Some(&b'{') {
            if let Some(close) = matching_bracket(bytes, options.start) {
                if close + 1 == options.end {
                    if let Some(variants) =
                        variants_object(source, Span::new(options.start + 1, close))
                    {
                        sequences.extend(variant_array_sequences(source, callee, variants));
                    }
                }
            }
        }
    }

    sequences
}

/// Span of the object value of a top-level `variants` property, brackets
/// excluded.
fn variants_object(source: &str, object_inner: Span) -> Option<Span> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = object_inner.start;
    while i < object_inner.end.min(bytes.len()) {
        if let Some(end) = skip_noncode(bytes, i) {
            i = end.max(i + 1);
            continue;
        }
        match bytes[i] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            _ if depth == 0 && is_ident_char(bytes[i]) => {
                let preceded = i > 0 && (is_ident_char(bytes[i - 1]) || bytes[i - 1] == b'.');
                let mut j = i;
                while j < bytes.len() && is_ident_char(bytes[j]) {
                    j += 1;
                }
                if !preceded && &source[i..j] == "variants" {
                    let mut k = j;
                    while k < bytes.len() && bytes[k].is_ascii_whitespace() {
                        k += 1;
                    }
                    if bytes.get(k) == Some(&b':') {
                        k += 1;
                        while k < bytes.len() && bytes[k].is_ascii_whitespace() {
                            k += 1;
                        }
                        if bytes.get(k) == Some(&b'{') {
                            if let Some(close) = matching_bracket(bytes, k) {
                                return Some(Span::new(k + 1, close));
                            }
                        }
                        return None;
                    }
                }
                i = j;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Every array literal under the variants object becomes one sequence; the
/// scan resumes past each array's closing bracket, so nested arrays are not
/// double-counted.
fn variant_array_sequences(source: &str, callee: &str, variants: Span) -> Vec<Sequence> {
    let bytes = source.as_bytes();
    let mut sequences = Vec::new();
    let mut i = variants.start;
    while i < variants.end.min(bytes.len()) {
        if let Some(end) = skip_noncode(bytes, i) {
            i = end.max(i + 1);
            continue;
        }
        if bytes[i] == b'[' {
            if let Some(close) = matching_bracket(bytes, i) {
                let elements = split_top_level(source, Span::new(i + 1, close), b',');
                sequences.push(sequence_from_parts(
                    source,
                    Span::new(i, close + 1),
                    &elements,
                    SequenceOrigin::BuilderVariant {
                        callee: callee.to_string(),
                    },
                ));
                i = close + 1;
                continue;
            }
        }
        i += 1;
    }
    sequences
}

fn sequence_from_parts(
    source: &str,
    container: Span,
    parts: &[Span],
    origin: SequenceOrigin,
) -> Sequence {
    let mut items = Vec::new();
    for part in parts {
        let span = trim_span(source, *part);
        if span.is_empty() {
            continue;
        }
        let Some(text) = span.slice(source) else {
            continue;
        };
        let kind = match literal_value(text) {
            Some(value) => ItemKind::Literal { value },
            None => ItemKind::Dynamic,
        };
        items.push(Item {
            index: items.len(),
            span,
            text: text.to_string(),
            kind,
        });
    }
    Sequence {
        span: container,
        origin,
        items,
    }
}

/// Cooked string content when `text` is exactly one string literal or one
/// substitution-free template literal; `None` for anything else.
pub fn literal_value(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    match bytes.first()? {
        b'"' | b'\'' => {
            let end = skip_string(bytes, 0);
            if end != text.len() || bytes.get(end - 1) != bytes.first() || end < 2 {
                return None;
            }
            Some(unescape(&text[1..end - 1]))
        }
        b'`' => {
            let end = skip_template(bytes, 0);
            if end != text.len() || end < 2 || bytes[end - 1] != b'`' {
                return None;
            }
            let inner = &text[1..end - 1];
            if has_substitution(inner) {
                return None;
            }
            Some(unescape(inner))
        }
        _ => None,
    }
}

fn has_substitution(inner: &str) -> bool {
    let bytes = inner.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'$' if bytes.get(i + 1) == Some(&b'{') => return true,
            _ => i += 1,
        }
    }
    false
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
