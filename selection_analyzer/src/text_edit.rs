//! Byte-offset text edits.

use crate::span::Span;

/// A single text edit in byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: Span, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

/// Clamps `pos` into `source` and moves it back to the nearest char boundary.
pub fn clamp_to_char_boundary(source: &str, pos: u32) -> u32 {
    let mut pos = usize::min(pos as usize, source.len());
    while !source.is_char_boundary(pos) {
        pos -= 1;
    }
    pos as u32
}

/// Clamps both ends of `span` into `source` and orders them.
pub fn clamp_span(source: &str, span: Span) -> Span {
    let start = clamp_to_char_boundary(source, span.start);
    let end = clamp_to_char_boundary(source, span.end);
    Span::new(u32::min(start, end), u32::max(start, end))
}

/// Applies byte-offset text edits and rebases a byte cursor through them.
///
/// Edits are applied in descending order to avoid shifting later offsets.
/// An edit is skipped if it is out of bounds or not on UTF-8 char boundaries.
///
/// Cursor rules:
/// - edits fully before the cursor shift it by the byte delta
/// - a cursor strictly inside a replaced range snaps to the edit `start`
pub fn apply_text_edits_bytes_with_cursor(
    source: &str,
    edits: &[TextEdit],
    cursor: u32,
) -> (String, u32) {
    let mut sorted = edits.to_vec();
    sorted.sort_by(|a, b| {
        b.range
            .start
            .cmp(&a.range.start)
            .then(b.range.end.cmp(&a.range.end))
    });

    let mut updated = source.to_string();
    let mut cursor = cursor;

    for edit in sorted {
        let start_u32 = edit.range.start;
        let end_u32 = edit.range.end;
        let start = start_u32 as usize;
        let end = end_u32 as usize;

        if start_u32 > end_u32 || end > updated.len() {
            continue;
        }
        if !updated.is_char_boundary(start) || !updated.is_char_boundary(end) {
            continue;
        }

        let replaced_len = end_u32 - start_u32;
        let inserted_len = edit.new_text.len() as u32;

        if end_u32 <= cursor {
            cursor = cursor - replaced_len + inserted_len;
        } else if start_u32 < cursor && cursor < end_u32 {
            cursor = start_u32;
        }

        updated.replace_range(start..end, &edit.new_text);
    }

    (updated, cursor)
}
