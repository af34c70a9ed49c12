/// Half-open byte span into the source string: `[start, end)`.
///
/// `start` and `end` must be valid UTF-8 slice boundaries for that same source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Span {
        debug_assert!(start <= end);
        Span { start, end }
    }

    /// An empty span at `pos`.
    pub fn empty(pos: u32) -> Span {
        Span {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True when `start < pos < end`.
    pub fn strictly_contains(&self, pos: u32) -> bool {
        self.start < pos && pos < self.end
    }

    /// Returns the covered slice of `source`, or `""` when the span is not a valid slice.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source
            .get(self.start as usize..self.end as usize)
            .unwrap_or("")
    }
}
