//! Completion for selection strings.
//! All coordinates are UTF-8 byte offsets into the input `text`.
//! Spans are half-open ranges `[start, end)`.

use serde::Serialize;

mod items;
mod matchers;
mod pipeline;
mod ranking;

pub(crate) use pipeline::complete;

/// Configuration knobs for `generate_with_config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompletionConfig {
    /// Upper bound on the number of returned items (`None` keeps all of them).
    pub max_items: Option<usize>,
    /// Also offer the prefix operator `not` where an operand may start.
    pub suggest_not: bool,
}

/// One completion candidate.
///
/// `text` is spliced into the source verbatim; `display_label` is what a UI shows and what the
/// typed prefix is matched against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub kind: SuggestionKind,
    pub display_label: String,
}

impl Suggestion {
    /// Creates a suggestion whose `text` equals its label.
    pub fn new(label: impl Into<String>, kind: SuggestionKind) -> Self {
        let label = label.into();
        Self {
            text: label.clone(),
            display_label: label,
            kind,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// True when accepting this suggestion opens a call `name()`.
    pub fn opens_call(&self) -> bool {
        self.text.ends_with("()")
    }
}

/// High-level bucket for UI grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuggestionKind {
    AttributeValue,
    Function,
    Operator,
    Namespace,
}
