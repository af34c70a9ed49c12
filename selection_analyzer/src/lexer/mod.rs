mod active;
mod token;

pub use active::{CursorPosition, find_active_token, prev_non_whitespace_before};
pub use token::{BoolOp, Symbol, Token, TokenKind};

use crate::span::Span;

/// Tokenize a single-line selection string.
///
/// Never fails: characters outside the selection syntax become one-character
/// [`TokenKind::Unknown`] tokens and an unterminated string runs to end of input.
///
/// - Identifiers: ASCII letters, digits, `_` and any non-ASCII codepoint; after the first
///   character also `/`, `.` and `-` (attribute values such as `team/core` or `v1.2`).
/// - Keywords: `and`, `or`, `not`, ASCII-case-insensitive.
/// - Strings: `"..."` or `'...'`, no escapes.
/// - Whitespace: each run becomes one token.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut iter = input.char_indices().peekable();

    while let Some((start, ch)) = iter.next() {
        let kind = match ch {
            c if c.is_whitespace() => {
                while iter.next_if(|&(_, c2)| c2.is_whitespace()).is_some() {}
                TokenKind::Whitespace
            }
            ':' => TokenKind::Colon,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '"' | '\'' => {
                let quote = ch;
                let mut terminated = false;
                for (_, c2) in iter.by_ref() {
                    if c2 == quote {
                        terminated = true;
                        break;
                    }
                }
                let end = iter.peek().map_or(input.len(), |&(i, _)| i);
                let inner_end = if terminated { end - quote.len_utf8() } else { end };
                let inner_start = start + quote.len_utf8();
                TokenKind::Str {
                    symbol: Symbol::new(&input[inner_start..inner_end.max(inner_start)]),
                    terminated,
                }
            }
            c if is_ident_start(c) => {
                while iter.next_if(|&(_, c2)| is_ident_continue(c2)).is_some() {}
                let end = iter.peek().map_or(input.len(), |&(i, _)| i);
                let word = &input[start..end];
                match BoolOp::from_word(word) {
                    Some(op) => TokenKind::Operator(op),
                    None => TokenKind::Ident(Symbol::new(word)),
                }
            }
            other => TokenKind::Unknown(Symbol::new(other.to_string())),
        };

        let end = iter.peek().map_or(input.len(), |&(i, _)| i);
        tokens.push(Token {
            kind,
            span: Span::new(start as u32, end as u32),
        });
    }

    tracing::trace!(len = input.len(), tokens = tokens.len(), "tokenized selection");
    tokens
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric() || c.len_utf8() > 1
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || matches!(c, '/' | '.' | '-')
}

/// True when `word` would lex back as a single identifier (not a keyword, no quoting needed).
pub fn is_plain_ident(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_ident_start(first) && chars.all(is_ident_continue) && BoolOp::from_word(word).is_none()
}
