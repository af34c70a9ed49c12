//! Stateful wrapper tying `generate`, the navigator and `apply` together for one input box.

use crate::completion::CompletionConfig;
use crate::edit::{ApplyResult, apply};
use crate::navigation::Navigator;
use crate::{AutocompleteResult, Suggestion, generate_with_config};
use selection_analyzer::GrammarDescription;

/// One autocomplete-enabled input.
///
/// The last `(text, cursor)` is memoized: repeating it keeps the result and the selected index.
/// Any other input recomputes the result and resets the selection to the first item.
#[derive(Debug, Clone)]
pub struct AutocompleteSession {
    grammar: GrammarDescription,
    config: CompletionConfig,
    input: Option<(String, usize)>,
    result: AutocompleteResult,
    navigator: Navigator,
}

impl AutocompleteSession {
    pub fn new(grammar: GrammarDescription, config: CompletionConfig) -> Self {
        Self {
            grammar,
            config,
            input: None,
            result: AutocompleteResult::empty(0),
            navigator: Navigator::new(),
        }
    }

    pub fn grammar(&self) -> &GrammarDescription {
        &self.grammar
    }

    pub fn update(&mut self, text: &str, cursor: usize) -> &AutocompleteResult {
        let unchanged = self
            .input
            .as_ref()
            .is_some_and(|(last_text, last_cursor)| last_text == text && *last_cursor == cursor);
        if unchanged {
            tracing::trace!(cursor, "autocomplete input unchanged");
            return &self.result;
        }

        self.result = generate_with_config(text, cursor, &self.grammar, self.config);
        self.navigator.reset(self.result.items.len());
        self.input = Some((text.to_string(), cursor));
        &self.result
    }

    pub fn result(&self) -> &AutocompleteResult {
        &self.result
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn next(&mut self) {
        self.navigator.next();
    }

    pub fn previous(&mut self) {
        self.navigator.previous();
    }

    pub fn dismiss(&mut self) {
        self.navigator.dismiss();
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.navigator.selected(&self.result)
    }

    /// Applies the selected suggestion and feeds the new text and cursor back in.
    ///
    /// Returns `None` when the list is hidden or empty.
    pub fn accept(&mut self) -> Option<ApplyResult> {
        let applied = {
            let (text, _) = self.input.as_ref()?;
            let suggestion = self.navigator.selected(&self.result)?;
            apply(text, &self.result, suggestion)
        };
        tracing::debug!(cursor = applied.cursor, "accepted suggestion");

        self.update(&applied.text, applied.cursor as usize);
        Some(applied)
    }
}
