use selection_analyzer::{Token as ByteToken, TokenKind, tokenize};
use selection_ide::{ApplyResult, AutocompleteResult, CompletionContext, Suggestion, SuggestionKind};

use crate::dto::v1::{
    ApplyResult as ApplyResultDto, AutocompleteResult as AutocompleteResultDto,
    CompletionContext as CompletionContextDto, Suggestion as SuggestionDto,
    SuggestionKind as SuggestionKindDto, Token,
};
use crate::offsets::byte_offset_to_utf16_offset;
use crate::span::byte_span_to_utf16_span;

pub(crate) fn autocomplete_result_view(
    source: &str,
    result: &AutocompleteResult,
) -> AutocompleteResultDto {
    AutocompleteResultDto {
        items: result.items.iter().map(suggestion_view).collect(),
        replace: byte_span_to_utf16_span(source, result.replace),
        context: context_view(&result.context),
    }
}

pub(crate) fn apply_result_view(applied: &ApplyResult) -> ApplyResultDto {
    ApplyResultDto {
        cursor: byte_offset_to_utf16_offset(&applied.text, applied.cursor as usize),
        text: applied.text.clone(),
    }
}

/// Non-whitespace tokens, for highlighting.
pub(crate) fn token_views(source: &str) -> Vec<Token> {
    tokenize(source)
        .iter()
        .filter(|token| !token.is_whitespace())
        .map(|token| token_view(source, token))
        .collect()
}

fn token_view(source: &str, token: &ByteToken) -> Token {
    Token {
        kind: token_kind_string(&token.kind).to_string(),
        text: token.text(source).to_string(),
        span: byte_span_to_utf16_span(source, token.span),
    }
}

fn suggestion_view(item: &Suggestion) -> SuggestionDto {
    SuggestionDto {
        text: item.text.clone(),
        kind: suggestion_kind_view(item.kind),
        display_label: item.display_label.clone(),
    }
}

fn suggestion_kind_view(kind: SuggestionKind) -> SuggestionKindDto {
    match kind {
        SuggestionKind::AttributeValue => SuggestionKindDto::AttributeValue,
        SuggestionKind::Function => SuggestionKindDto::Function,
        SuggestionKind::Operator => SuggestionKindDto::Operator,
        SuggestionKind::Namespace => SuggestionKindDto::Namespace,
    }
}

fn context_view(context: &CompletionContext) -> CompletionContextDto {
    match context {
        CompletionContext::ExpectingSelectorOrFunction => {
            CompletionContextDto::ExpectingSelectorOrFunction
        }
        CompletionContext::ExpectingNamespaceValue(namespace) => {
            CompletionContextDto::ExpectingNamespaceValue {
                namespace: namespace.clone(),
            }
        }
        CompletionContext::ExpectingBooleanOperator => {
            CompletionContextDto::ExpectingBooleanOperator
        }
        CompletionContext::InsideFunctionArgs(function) => {
            CompletionContextDto::InsideFunctionArgs {
                function: function.clone(),
            }
        }
        CompletionContext::Unknown => CompletionContextDto::Unknown,
    }
}

fn token_kind_string(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::Ident(_) => "Ident",
        TokenKind::Operator(_) => "Operator",
        TokenKind::Colon => "Colon",
        TokenKind::OpenParen => "OpenParen",
        TokenKind::CloseParen => "CloseParen",
        TokenKind::Whitespace => "Whitespace",
        TokenKind::Str { .. } => "String",
        TokenKind::Unknown(_) => "Unknown",
    }
}
