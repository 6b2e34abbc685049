use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` into the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The source text this span covers, or `None` when it falls outside the
    /// source or off a char boundary.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

/// Shape of one argument or array element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// A string literal (or substitution-free template literal); `value` is
    /// the cooked string content.
    Literal { value: String },
    /// Anything else: identifier, call, conditional, logical, spread.
    Dynamic,
}

/// One syntactic unit being ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Original position within the sequence.
    pub index: usize,
    /// Byte span of the item's source text.
    pub span: Span,
    /// Verbatim source slice for the item.
    pub text: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn literal_value(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Literal { value } => Some(value),
            ItemKind::Dynamic => None,
        }
    }
}

/// Where a sequence came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SequenceOrigin {
    /// Positional arguments of a combiner call such as `cn(...)`.
    CombinerArgs { callee: String },
    /// Array-literal base argument of a variant builder.
    BuilderBase { callee: String },
    /// One array literal inside a builder's `variants` option map.
    BuilderVariant { callee: String },
}

impl SequenceOrigin {
    pub fn callee(&self) -> &str {
        match self {
            SequenceOrigin::CombinerArgs { callee }
            | SequenceOrigin::BuilderBase { callee }
            | SequenceOrigin::BuilderVariant { callee } => callee,
        }
    }
}

/// An ordered list of items drawn from one syntactic container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    /// Span of the container (the whole call, or the array literal); ordering
    /// diagnostics anchor here.
    pub span: Span,
    pub origin: SequenceOrigin,
    pub items: Vec<Item>,
}

#[cfg(test)]
mod tests {
    use super::{Item, ItemKind, Span};

    #[test]
    fn span_slices_source() {
        let src = "cn(\"flex\")";
        let span = Span::new(3, 9);
        assert_eq!(span.slice(src), Some("\"flex\""));
        assert_eq!(Span::new(3, 99).slice(src), None);
    }

    #[test]
    fn literal_value_only_for_literals() {
        let lit = Item {
            index: 0,
            span: Span::new(0, 6),
            text: "\"flex\"".to_string(),
            kind: ItemKind::Literal {
                value: "flex".to_string(),
            },
        };
        assert_eq!(lit.literal_value(), Some("flex"));

        let dynamic = Item {
            index: 1,
            span: Span::new(8, 14),
            text: "active".to_string(),
            kind: ItemKind::Dynamic,
        };
        assert_eq!(dynamic.literal_value(), None);
    }
}
