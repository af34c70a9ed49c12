//! Keyboard selection over the current suggestion list.

use crate::{AutocompleteResult, Suggestion};

/// Selected index into the current suggestion list, plus whether the list is shown.
///
/// `index` stays within `[0, len)`; with an empty list every move is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    index: usize,
    len: usize,
    visible: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points at the first item of a fresh list of `len` items.
    pub fn reset(&mut self, len: usize) {
        self.index = 0;
        self.len = len;
        self.visible = len > 0;
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = self.index.checked_sub(1).unwrap_or(self.len - 1);
    }

    /// Hides the list. The text is not touched.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The suggestion an "accept" would apply, if the list is shown.
    pub fn selected<'r>(&self, result: &'r AutocompleteResult) -> Option<&'r Suggestion> {
        if !self.visible {
            return None;
        }
        result.items.get(self.index)
    }
}
