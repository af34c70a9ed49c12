//! Autocomplete for selection query strings.
//!
//! Coordinates are UTF-8 byte offsets (`[start, end)`), matching `selection_analyzer`.
//! Every entry point is total: any text and cursor produce a well-formed result.

mod completion;
mod context;
mod edit;
mod navigation;
mod session;

use selection_analyzer::{GrammarDescription, Span};

pub use completion::{CompletionConfig, Suggestion, SuggestionKind};
pub use context::CompletionContext;
pub use edit::{ApplyResult, apply, apply_at};
pub use navigation::Navigator;
pub use session::AutocompleteSession;

/// Completion payload for one `(text, cursor)`.
///
/// Accepting `items[i]` replaces `replace` (the partial word, or an empty span at the cursor)
/// with `items[i].text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteResult {
    pub items: Vec<Suggestion>,
    pub replace: Span,
    pub context: CompletionContext,
}

impl AutocompleteResult {
    /// No suggestions, replacing nothing at `cursor`.
    pub fn empty(cursor: u32) -> Self {
        Self {
            items: Vec::new(),
            replace: Span::empty(cursor),
            context: CompletionContext::Unknown,
        }
    }

    pub fn from(&self) -> u32 {
        self.replace.start
    }

    pub fn to(&self) -> u32 {
        self.replace.end
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Compute completions at a byte cursor with the default configuration.
pub fn generate(text: &str, cursor: usize, grammar: &GrammarDescription) -> AutocompleteResult {
    generate_with_config(text, cursor, grammar, CompletionConfig::default())
}

/// Compute completions at a byte cursor.
///
/// Out-of-range cursors are clamped to the end of `text`; cursors inside a multi-byte char move
/// back to its start.
pub fn generate_with_config(
    text: &str,
    cursor: usize,
    grammar: &GrammarDescription,
    config: CompletionConfig,
) -> AutocompleteResult {
    completion::complete(text, cursor, grammar, config)
}

#[cfg(test)]
mod tests;
