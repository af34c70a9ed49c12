//! Cursor-context detection for completion.
//! All coordinates are UTF-8 byte offsets into the original source text.

use selection_analyzer::{
    CursorPosition, GrammarDescription, Span, Token, TokenKind, find_active_token,
    prev_non_whitespace_before,
};
use serde::Serialize;

/// What the user is expected to type at the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CompletionContext {
    /// Start of an operand: after nothing, an operator, or `(`.
    ExpectingSelectorOrFunction,
    /// Right after `namespace:`.
    ExpectingNamespaceValue(String),
    /// After a complete operand and some whitespace.
    ExpectingBooleanOperator,
    /// Start of an operand inside `function(...)`. Completes like a selector.
    InsideFunctionArgs(String),
    Unknown,
}

impl CompletionContext {
    pub fn expects_selector(&self) -> bool {
        matches!(
            self,
            CompletionContext::ExpectingSelectorOrFunction
                | CompletionContext::InsideFunctionArgs(_)
        )
    }
}

/// Full cursor context used by the completion pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CursorContext {
    pub(crate) context: CompletionContext,
    pub(crate) replace: Span,
    /// The partial word being completed (string quotes stripped).
    pub(crate) query: String,
    /// Opening quote of the active string token, if the user started one.
    pub(crate) quote: Option<char>,
}

/// Detects context/replace/query for the current cursor.
///
/// `cursor` must already be clamped to a char boundary of `text`.
pub(crate) fn detect_cursor_context(
    text: &str,
    tokens: &[Token],
    cursor: u32,
    grammar: &GrammarDescription,
) -> CursorContext {
    let position = find_active_token(tokens, cursor);
    let active = position.active_index().map(|idx| &tokens[idx]);
    let context = classify(tokens, position, cursor, grammar);

    let active = match active {
        Some(active) if context != CompletionContext::Unknown => active,
        _ => {
            return CursorContext {
                context,
                replace: Span::empty(cursor),
                query: String::new(),
                quote: None,
            };
        }
    };

    let (query, quote) = match &active.kind {
        TokenKind::Str { symbol, .. } => (symbol.text.clone(), active.text(text).chars().next()),
        _ => (active.text(text).to_string(), None),
    };

    CursorContext {
        context,
        replace: active.span,
        query,
        quote,
    }
}

/// Classifies the cursor position using token neighbors.
pub(crate) fn classify(
    tokens: &[Token],
    position: CursorPosition,
    cursor: u32,
    grammar: &GrammarDescription,
) -> CompletionContext {
    let anchor = position.anchor();
    let active = position.active_index().map(|idx| &tokens[idx]);
    let anchor_start = active.map_or(cursor, |token| token.span.start);

    if let Some(namespace) = namespace_before(tokens, anchor, anchor_start) {
        return CompletionContext::ExpectingNamespaceValue(namespace);
    }

    // Quoted text only completes as a namespace value.
    if active.is_some_and(|token| matches!(token.kind, TokenKind::Str { .. })) {
        return CompletionContext::Unknown;
    }

    let prev = prev_non_whitespace_before(tokens, anchor);
    match prev.map(|(_, token)| &token.kind) {
        None | Some(TokenKind::Operator(_)) | Some(TokenKind::OpenParen) => {
            return match enclosing_call(tokens, anchor, grammar) {
                Some(callee) => CompletionContext::InsideFunctionArgs(callee),
                None => CompletionContext::ExpectingSelectorOrFunction,
            };
        }
        _ => {}
    }

    // Byte comparison: the cursor may sit anywhere inside the whitespace run.
    if let Some((_, prev_token)) = prev
        && prev_token.ends_term()
        && prev_token.span.end < anchor_start
    {
        return CompletionContext::ExpectingBooleanOperator;
    }

    CompletionContext::Unknown
}

/// Returns `ns` when the anchor directly follows `ns:` with no whitespace in between.
fn namespace_before(tokens: &[Token], anchor: usize, anchor_start: u32) -> Option<String> {
    let colon_idx = anchor.checked_sub(1)?;
    let colon = tokens.get(colon_idx)?;
    if !matches!(colon.kind, TokenKind::Colon) || colon.span.end != anchor_start {
        return None;
    }
    let namespace = tokens.get(colon_idx.checked_sub(1)?)?;
    namespace.kind.ident_text().map(str::to_string)
}

/// Finds the callee of the innermost unclosed `(` before `anchor`.
///
/// The callee is the identifier ending exactly where the `(` starts; `value (` is a plain group.
/// It need not be a known function: an unknown name still counts as a call so a typo
/// does not switch completions off. Known names are reported in their declared casing.
pub(crate) fn enclosing_call(
    tokens: &[Token],
    anchor: usize,
    grammar: &GrammarDescription,
) -> Option<String> {
    let mut stack = Vec::new();
    for (idx, token) in tokens.iter().enumerate().take(anchor) {
        match token.kind {
            TokenKind::OpenParen => stack.push(idx),
            TokenKind::CloseParen => {
                let _ = stack.pop();
            }
            _ => {}
        }
    }
    let lparen_idx = *stack.last()?;
    let callee_token = tokens.get(lparen_idx.checked_sub(1)?)?;
    if callee_token.span.end != tokens[lparen_idx].span.start {
        return None;
    }
    let callee = callee_token.kind.ident_text()?;

    Some(
        grammar
            .lookup_function(callee)
            .unwrap_or(callee)
            .to_string(),
    )
}
