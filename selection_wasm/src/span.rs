use selection_analyzer::Span;

use crate::dto::v1::Span as Utf16Span;
use crate::offsets::{byte_offset_to_utf16_offset, utf16_offset_to_byte};

pub fn byte_span_to_utf16_span(source: &str, span: Span) -> Utf16Span {
    Utf16Span {
        start: byte_offset_to_utf16_offset(source, span.start as usize),
        end: byte_offset_to_utf16_offset(source, span.end as usize),
    }
}

/// Inverse of [`byte_span_to_utf16_span`]; reversed ends are swapped.
pub fn utf16_span_to_byte_span(source: &str, start: u32, end: u32) -> Span {
    let start = utf16_offset_to_byte(source, start as usize) as u32;
    let end = utf16_offset_to_byte(source, end as usize) as u32;
    Span::new(u32::min(start, end), u32::max(start, end))
}
