//! Core syntax layer for selection query strings.
//!
//! Pipeline: tokenize → locate the active token → (in `selection_ide`) classify and complete.
//! All spans are UTF-8 byte offsets into the original source, using `[start, end)`.
//! UTF-16 conversion for editors happens in `selection_wasm`.

pub mod grammar;
mod lexer;
mod span;
mod tests;
mod text_edit;

pub use grammar::{GrammarDescription, GrammarError, Namespace};
pub use lexer::{
    BoolOp, CursorPosition, Symbol, Token, TokenKind, find_active_token, is_plain_ident,
    prev_non_whitespace_before, tokenize,
};
pub use span::Span;
pub use text_edit::{
    TextEdit, apply_text_edits_bytes_with_cursor, clamp_span, clamp_to_char_boundary,
};
