use serde::{Deserialize, Serialize};

/// Priority bucket for a utility-class token.
///
/// The declaration order here *is* the canonical sort order: lower ordinals
/// come first in a well-ordered sequence. `Dynamic` and `Custom` are
/// sentinels without patterns: `Dynamic` holds non-literal items (variables,
/// conditionals, calls), `Custom` holds tokens no pattern recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Marker,
    Layout,
    Structure,
    Style,
    Transition,
    Interaction,
    State,
    Accessibility,
    Dynamic,
    Custom,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Marker,
        Category::Layout,
        Category::Structure,
        Category::Style,
        Category::Transition,
        Category::Interaction,
        Category::State,
        Category::Accessibility,
        Category::Dynamic,
        Category::Custom,
    ];

    /// Integer rank; the sole sort key.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Category::Marker => "Marker",
            Category::Layout => "Layout",
            Category::Structure => "Structure",
            Category::Style => "Style",
            Category::Transition => "Transition",
            Category::Interaction => "Interaction",
            Category::State => "State",
            Category::Accessibility => "Accessibility",
            Category::Dynamic => "Dynamic",
            Category::Custom => "Custom",
        }
    }

    pub fn is_sentinel(self) -> bool {
        matches!(self, Category::Dynamic | Category::Custom)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
