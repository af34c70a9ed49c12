//! The JS host indexes strings in UTF-16 code units; Rust strings are indexed in bytes.
//! Both directions clamp to the string and never split a char.

/// UTF-16 offset to byte offset. An offset inside a surrogate pair moves past the pair.
pub fn utf16_offset_to_byte(source: &str, utf16: usize) -> usize {
    let mut units = 0usize;
    for (byte_idx, ch) in source.char_indices() {
        if units >= utf16 {
            return byte_idx;
        }
        units += ch.len_utf16();
    }
    source.len()
}

/// Byte offset to UTF-16 offset. A byte offset inside a char counts the whole char.
pub fn byte_offset_to_utf16_offset(source: &str, byte: usize) -> u32 {
    let units: usize = source
        .char_indices()
        .take_while(|(idx, _)| *idx < byte)
        .map(|(_, ch)| ch.len_utf16())
        .sum();
    units as u32
}
