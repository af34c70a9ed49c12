//! Locating the token under the cursor.

use super::token::Token;

/// Where the cursor sits relative to the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    /// The cursor is editing `tokens[index]`.
    InToken(usize),
    /// No token is being edited; `index` is the insertion point in `tokens`.
    Between(usize),
}

impl CursorPosition {
    /// Token index the classification looks backwards from.
    pub fn anchor(self) -> usize {
        match self {
            CursorPosition::InToken(idx) | CursorPosition::Between(idx) => idx,
        }
    }

    pub fn active_index(self) -> Option<usize> {
        match self {
            CursorPosition::InToken(idx) => Some(idx),
            CursorPosition::Between(_) => None,
        }
    }
}

/// Finds the token being edited at `cursor` (a byte offset).
///
/// - A token strictly containing the cursor is active, unless it is whitespace.
/// - At a boundary, the token ending at the cursor is active if it is a partial word
///   (identifier, keyword, unterminated string), so typing keeps extending it.
/// - Otherwise the cursor is between tokens.
///
/// ```text
/// Source:  tag:pr␠
/// Bytes:   0  3 4 6 7
/// cursor 6 => InToken(2)   ("pr")
/// cursor 7 => Between(4)   (end of input)
/// cursor 4 => Between(2)   (after ':')
/// ```
pub fn find_active_token(tokens: &[Token], cursor: u32) -> CursorPosition {
    let cursor = tokens
        .last()
        .map_or(0, |last| u32::min(cursor, last.span.end));

    // First token that ends after the cursor.
    let idx = tokens.partition_point(|token| token.span.end <= cursor);

    if let Some(token) = tokens.get(idx)
        && token.span.strictly_contains(cursor)
    {
        return if token.is_whitespace() {
            CursorPosition::Between(idx)
        } else {
            CursorPosition::InToken(idx)
        };
    }

    if idx > 0 {
        let prev = &tokens[idx - 1];
        if prev.span.end == cursor && prev.is_partial_word() {
            return CursorPosition::InToken(idx - 1);
        }
    }

    CursorPosition::Between(idx)
}

/// Finds the previous non-whitespace token before `idx` (token index, not bytes).
pub fn prev_non_whitespace_before(tokens: &[Token], idx: usize) -> Option<(usize, &Token)> {
    let end = usize::min(idx, tokens.len());
    tokens[..end]
        .iter()
        .enumerate()
        .rev()
        .find(|(_, token)| !token.is_whitespace())
}
