use crate::{AutocompleteResult, Suggestion};
use selection_analyzer::{Span, TextEdit, apply_text_edits_bytes_with_cursor, clamp_span};

/// Result payload for accepting a suggestion, in byte coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub text: String,
    pub cursor: u32,
}

/// Replaces `result.replace` with the suggestion's text.
///
/// The cursor lands after the inserted text, or between the parens of an inserted `name()`.
pub fn apply(text: &str, result: &AutocompleteResult, suggestion: &Suggestion) -> ApplyResult {
    apply_at(text, result.replace, suggestion)
}

/// Like [`apply`], with an explicit replace span.
///
/// The span is clamped into `text` (and onto char boundaries), so this never panics.
pub fn apply_at(text: &str, replace: Span, suggestion: &Suggestion) -> ApplyResult {
    let replace = clamp_span(text, replace);
    let edit = TextEdit::new(replace, suggestion.text.clone());
    let (updated, _) = apply_text_edits_bytes_with_cursor(text, &[edit], replace.start);

    ApplyResult {
        text: updated,
        cursor: cursor_after_insert(replace.start, suggestion),
    }
}

fn cursor_after_insert(start: u32, suggestion: &Suggestion) -> u32 {
    let end = start.saturating_add(suggestion.text.len() as u32);
    if suggestion.opens_call() {
        end - 1
    } else {
        end
    }
}
