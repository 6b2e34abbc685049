//! Byte-level scanning helpers: skip strings, template literals, and
//! comments; match brackets; split on top-level separators.
//!
//! The scanner works on bytes and only ever lands on ASCII delimiters, so
//! multi-byte UTF-8 sequences pass through untouched.
//
// TODO: regex literals are not tracked; a regex containing an unbalanced
// quote or bracket can desynchronize one candidate call site. Tracking
// delimiter context the way the template scanner does would close this.

use classort_types::Span;

pub(crate) fn is_ident_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}

/// End of a single/double-quoted string starting at `start` (exclusive
/// index just past the closing quote). An unterminated string ends at the
/// line break or at end of input.
pub(crate) fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i + 1,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// End of a template literal starting at the backtick at `start`.
/// `${ ... }` substitutions are skipped as code (they may nest strings,
/// templates, and brackets of their own).
pub(crate) fn skip_template(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => return i + 1,
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                i = skip_balanced_code(bytes, i + 2, b'}');
            }
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Advance through code until the `close` delimiter that balances one
/// already-open bracket; returns the index just past it.
fn skip_balanced_code(bytes: &[u8], mut i: usize, close: u8) -> usize {
    let mut depth = 0usize;
    while i < bytes.len() {
        if let Some(end) = skip_noncode(bytes, i) {
            i = end.max(i + 1);
            continue;
        }
        match bytes[i] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => {
                if depth == 0 {
                    return if bytes[i] == close { i + 1 } else { i };
                }
                depth -= 1;
            }
            _ => {}
        }
        i += 1;
    }
    bytes.len()
}

/// When `i` sits on a non-code construct (string, template, comment),
/// returns the index just past it; `None` when `i` starts code.
pub(crate) fn skip_noncode(bytes: &[u8], i: usize) -> Option<usize> {
    match bytes[i] {
        b'\'' | b'"' => Some(skip_string(bytes, i)),
        b'`' => Some(skip_template(bytes, i)),
        b'/' if bytes.get(i + 1) == Some(&b'/') => {
            let mut j = i + 2;
            while j < bytes.len() && bytes[j] != b'\n' {
                j += 1;
            }
            Some(j)
        }
        b'/' if bytes.get(i + 1) == Some(&b'*') => {
            let mut j = i + 2;
            while j + 1 < bytes.len() {
                if bytes[j] == b'*' && bytes[j + 1] == b'/' {
                    return Some(j + 2);
                }
                j += 1;
            }
            Some(bytes.len())
        }
        _ => None,
    }
}

/// Index of the closing bracket matching the opener at `open`, or `None`
/// when the input runs out or the closer is of the wrong kind.
pub(crate) fn matching_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    let close = match bytes.get(open)? {
        b'(' => b')',
        b'[' => b']',
        b'{' => b'}',
        _ => return None,
    };
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        if i > open {
            if let Some(end) = skip_noncode(bytes, i) {
                i = end.max(i + 1);
                continue;
            }
        }
        match bytes[i] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => {
                depth -= 1;
                if depth == 0 {
                    return (bytes[i] == close).then_some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Split `span` on `separator` bytes that sit at bracket depth zero,
/// outside strings and comments. Always yields at least one part; parts are
/// untrimmed and may be empty.
pub(crate) fn split_top_level(source: &str, span: Span, separator: u8) -> Vec<Span> {
    let bytes = source.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut part_start = span.start;
    let mut i = span.start;
    while i < span.end.min(bytes.len()) {
        if let Some(end) = skip_noncode(bytes, i) {
            i = end.max(i + 1);
            continue;
        }
        match bytes[i] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b if b == separator && depth == 0 => {
                parts.push(Span::new(part_start, i));
                part_start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(Span::new(part_start, span.end));
    parts
}

/// Shrink a span past surrounding ASCII whitespace.
pub(crate) fn trim_span(source: &str, span: Span) -> Span {
    let bytes = source.as_bytes();
    let mut start = span.start;
    let mut end = span.end.min(bytes.len());
    while start < end && bytes[start].is_ascii_whitespace() {
        start += 1;
    }
    while end > start && bytes[end - 1].is_ascii_whitespace() {
        end -= 1;
    }
    Span::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::{matching_bracket, skip_noncode, skip_string, skip_template, split_top_level, trim_span};
    use classort_types::Span;

    #[test]
    fn strings_skip_past_escapes() {
        let src = r#""a\"b" rest"#;
        assert_eq!(skip_string(src.as_bytes(), 0), 6);
    }

    #[test]
    fn unterminated_string_stops_at_line_end() {
        let src = "\"open\nnext";
        assert_eq!(skip_string(src.as_bytes(), 0), 6);
    }

    #[test]
    fn templates_skip_nested_substitutions() {
        let src = "`a ${fn({x: '}'})} b` rest";
        assert_eq!(skip_template(src.as_bytes(), 0), 21);
    }

    #[test]
    fn comments_are_noncode() {
        let src = "// to eol\nx";
        assert_eq!(skip_noncode(src.as_bytes(), 0), Some(9));
        let src = "/* block */x";
        assert_eq!(skip_noncode(src.as_bytes(), 0), Some(11));
        assert_eq!(skip_noncode(b"x", 0), None);
    }

    #[test]
    fn brackets_match_through_strings_and_comments() {
        let src = "(a, \")\", /* ) */ [b, c])";
        assert_eq!(matching_bracket(src.as_bytes(), 0), Some(src.len() - 1));
    }

    #[test]
    fn mismatched_or_unterminated_brackets_do_not_match() {
        assert_eq!(matching_bracket(b"(a]", 0), None);
        assert_eq!(matching_bracket(b"(a", 0), None);
    }

    #[test]
    fn split_ignores_nested_and_quoted_commas() {
        let src = "a, f(b, c), \"d,e\", g";
        let parts = split_top_level(src, Span::new(0, src.len()), b',');
        let texts: Vec<&str> = parts
            .iter()
            .map(|s| s.slice(src).unwrap().trim())
            .collect();
        assert_eq!(texts, vec!["a", "f(b, c)", "\"d,e\"", "g"]);
    }

    #[test]
    fn trim_span_shrinks_whitespace() {
        let src = "  x \t";
        assert_eq!(trim_span(src, Span::new(0, src.len())), Span::new(2, 3));
        assert_eq!(trim_span(src, Span::new(0, 2)), Span::new(2, 2));
    }
}
