//! Completion pipeline entry point.
//! Works in UTF-8 byte offsets (cursor and replace span).

use super::{CompletionConfig, items, ranking};
use crate::AutocompleteResult;
use crate::context::{CompletionContext, detect_cursor_context};
use selection_analyzer::{GrammarDescription, clamp_to_char_boundary, tokenize};

/// Computes the completion result for a single cursor position.
pub(crate) fn complete(
    text: &str,
    cursor: usize,
    grammar: &GrammarDescription,
    config: CompletionConfig,
) -> AutocompleteResult {
    let cursor = clamp_to_char_boundary(text, u32::try_from(cursor).unwrap_or(u32::MAX));
    let tokens = tokenize(text);

    // 1) Detect context, replace span and query at the cursor.
    let cursor_ctx = detect_cursor_context(text, tokens.as_slice(), cursor, grammar);

    // 2) Collect raw candidates for the context.
    let mut items = match &cursor_ctx.context {
        context if context.expects_selector() => items::selector_items(grammar, config),
        CompletionContext::ExpectingNamespaceValue(namespace) => {
            items::namespace_value_items(grammar, namespace, cursor_ctx.quote)
        }
        CompletionContext::ExpectingBooleanOperator => items::boolean_operator_items(),
        _ => Vec::new(),
    };
    let candidates = items.len();

    // 3) Filter by the typed prefix, de-duplicate and rank.
    ranking::rank_by_query(&cursor_ctx.query, &mut items);
    ranking::truncate(&mut items, config.max_items);

    tracing::debug!(
        context = ?cursor_ctx.context,
        query = %cursor_ctx.query,
        candidates,
        kept = items.len(),
        "completion"
    );

    AutocompleteResult {
        items,
        replace: cursor_ctx.replace,
        context: cursor_ctx.context,
    }
}
