//! Lexer tokens.
//!
//! Token spans use UTF-8 byte offsets into the original source and are half-open `[start, end)`.
//! Tokens partition the source: there are no gaps and no end-of-input token.

use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub text: String,
}

impl Symbol {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Boolean keyword operators. Recognized ASCII-case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOp {
    And,
    Or,
    Not,
}

impl BoolOp {
    pub fn from_word(word: &str) -> Option<BoolOp> {
        if word.eq_ignore_ascii_case("and") {
            Some(BoolOp::And)
        } else if word.eq_ignore_ascii_case("or") {
            Some(BoolOp::Or)
        } else if word.eq_ignore_ascii_case("not") {
            Some(BoolOp::Not)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BoolOp::And => "and",
            BoolOp::Or => "or",
            BoolOp::Not => "not",
        }
    }

    /// `not` only ever appears in prefix position.
    pub fn is_infix(self) -> bool {
        matches!(self, BoolOp::And | BoolOp::Or)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Namespace key, attribute value, or function name.
    Ident(Symbol),
    /// `and`, `or`, `not`. The source casing is only available through the span.
    Operator(BoolOp),
    /// `:`
    Colon,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// A run of whitespace.
    Whitespace,
    /// A quoted string including its quotes.
    ///
    /// `symbol` is the text between the quotes. An unterminated string runs to end of input.
    Str { symbol: Symbol, terminated: bool },
    /// Any other single character.
    Unknown(Symbol),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// The source slice covered by this token.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace)
    }

    /// Tokens that keep growing while the user types at their end.
    pub fn is_partial_word(&self) -> bool {
        match self.kind {
            TokenKind::Ident(_) | TokenKind::Operator(_) => true,
            TokenKind::Str { terminated, .. } => !terminated,
            _ => false,
        }
    }

    /// Tokens that end a complete operand: `value`, `"value"`, `)`.
    pub fn ends_term(&self) -> bool {
        match self.kind {
            TokenKind::Ident(_) | TokenKind::CloseParen => true,
            TokenKind::Str { terminated, .. } => terminated,
            _ => false,
        }
    }
}

impl TokenKind {
    pub fn ident_text(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(symbol) => Some(symbol.text.as_str()),
            _ => None,
        }
    }
}
