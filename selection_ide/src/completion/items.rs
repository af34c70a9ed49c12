//! Builds the raw candidate list for a context.
//! Items are not filtered or ranked here (that happens in `ranking`).

use crate::completion::{CompletionConfig, Suggestion, SuggestionKind};
use selection_analyzer::{BoolOp, GrammarDescription, is_plain_ident};

/// Candidates where an operand may start: `namespace:`, `function()`, bare name-base values.
pub(crate) fn selector_items(
    grammar: &GrammarDescription,
    config: CompletionConfig,
) -> Vec<Suggestion> {
    let mut items = Vec::new();
    items.extend(
        grammar
            .namespaces
            .iter()
            .map(|ns| Suggestion::new(format!("{}:", ns.name), SuggestionKind::Namespace)),
    );
    items.extend(
        grammar
            .functions
            .iter()
            .map(|func| Suggestion::new(format!("{func}()"), SuggestionKind::Function)),
    );
    items.extend(
        grammar
            .name_base_values()
            .iter()
            .map(|value| value_item(value, None)),
    );
    if config.suggest_not {
        items.push(Suggestion::new(
            BoolOp::Not.as_str(),
            SuggestionKind::Operator,
        ));
    }
    items
}

/// Candidates after `namespace:`. Unknown namespaces have none.
pub(crate) fn namespace_value_items(
    grammar: &GrammarDescription,
    namespace: &str,
    quote: Option<char>,
) -> Vec<Suggestion> {
    let Some(ns) = grammar.lookup(namespace) else {
        tracing::debug!(namespace, "unknown namespace");
        return Vec::new();
    };
    ns.values
        .iter()
        .map(|value| value_item(value, quote))
        .collect()
}

/// Candidates after a complete operand. `not` is prefix-only and never offered here.
pub(crate) fn boolean_operator_items() -> Vec<Suggestion> {
    [BoolOp::And, BoolOp::Or, BoolOp::Not]
        .into_iter()
        .filter(|op| op.is_infix())
        .map(|op| Suggestion::new(op.as_str(), SuggestionKind::Operator))
        .collect()
}

fn value_item(value: &str, quote: Option<char>) -> Suggestion {
    Suggestion::new(value, SuggestionKind::AttributeValue).with_text(value_insert_text(value, quote))
}

/// Values that would not lex back as one identifier are quoted.
///
/// `quote` is the quote the user already opened; it forces quoting with that character.
pub(crate) fn value_insert_text(value: &str, quote: Option<char>) -> String {
    let quote = match quote {
        Some(quote) => quote,
        None if is_plain_ident(value) => return value.to_string(),
        None if value.contains('"') && !value.contains('\'') => '\'',
        None => '"',
    };
    format!("{quote}{value}{quote}")
}
