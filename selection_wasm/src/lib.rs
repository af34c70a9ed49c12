//! WASM exports for selection autocomplete.
//!
//! Offsets crossing this boundary are UTF-16 code units; the core works in UTF-8 bytes.

pub mod converter;
pub mod dto;
mod offsets;
mod span;

use js_sys::Error as JsError;
use selection_ide::{AutocompleteSession, Suggestion, SuggestionKind, apply_at};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::converter::{BoundaryError, Converter};
use crate::span::utf16_span_to_byte_span;

impl From<BoundaryError> for JsValue {
    fn from(err: BoundaryError) -> Self {
        JsValue::from(JsError::new(err.message()))
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Completions at `cursor_utf16`. Throws on invalid grammar or config JSON.
#[wasm_bindgen]
pub fn autocomplete(
    source: String,
    cursor_utf16: u32,
    grammar_json: String,
    config_json: Option<String>,
) -> Result<JsValue, JsValue> {
    let grammar = Converter::parse_grammar(&grammar_json)?;
    let config = Converter::parse_config(config_json.as_deref())?;
    let cursor = Converter::cursor_utf16_to_byte(&source, cursor_utf16);

    let result = selection_ide::generate_with_config(&source, cursor, &grammar, config);
    Ok(to_js(&Converter::autocomplete_result_view(&source, &result)))
}

/// Replaces `[from_utf16, to_utf16)` with `text`; the cursor lands between the parens of `name()`.
#[wasm_bindgen]
pub fn apply_suggestion(source: String, from_utf16: u32, to_utf16: u32, text: String) -> JsValue {
    let replace = utf16_span_to_byte_span(&source, from_utf16, to_utf16);
    // The kind does not affect splicing; only the text does.
    let suggestion = Suggestion::new(text, SuggestionKind::AttributeValue);
    let applied = apply_at(&source, replace, &suggestion);
    to_js(&Converter::apply_result_view(&applied))
}

/// Non-whitespace tokens with UTF-16 spans.
#[wasm_bindgen]
pub fn tokenize(source: String) -> JsValue {
    to_js(&Converter::token_views(&source))
}

/// Stateful autocomplete for one input element.
#[wasm_bindgen]
pub struct SelectionInput {
    session: AutocompleteSession,
    source: String,
}

#[wasm_bindgen]
impl SelectionInput {
    #[wasm_bindgen(constructor)]
    pub fn new(grammar_json: String, config_json: Option<String>) -> Result<SelectionInput, JsValue> {
        let grammar = Converter::parse_grammar(&grammar_json)?;
        let config = Converter::parse_config(config_json.as_deref())?;
        Ok(SelectionInput {
            session: AutocompleteSession::new(grammar, config),
            source: String::new(),
        })
    }

    /// Recomputes completions unless text and cursor are unchanged.
    pub fn update(&mut self, source: String, cursor_utf16: u32) -> JsValue {
        let cursor = Converter::cursor_utf16_to_byte(&source, cursor_utf16);
        let result = self.session.update(&source, cursor);
        let view = Converter::autocomplete_result_view(&source, result);
        self.source = source;
        to_js(&view)
    }

    pub fn next(&mut self) {
        self.session.next();
    }

    pub fn previous(&mut self) {
        self.session.previous();
    }

    pub fn dismiss(&mut self) {
        self.session.dismiss();
    }

    /// Index of the highlighted item, or `undefined` when the list is hidden or empty.
    pub fn selected_index(&self) -> Option<u32> {
        self.session
            .selected()
            .map(|_| self.session.navigator().index() as u32)
    }

    /// Applies the highlighted item; `null` when nothing is highlighted.
    pub fn accept(&mut self) -> JsValue {
        let Some(applied) = self.session.accept() else {
            return JsValue::NULL;
        };
        self.source = applied.text.clone();
        to_js(&Converter::apply_result_view(&applied))
    }

    /// Current completions, in UTF-16 coordinates of the last text.
    pub fn result(&self) -> JsValue {
        to_js(&Converter::autocomplete_result_view(
            &self.source,
            self.session.result(),
        ))
    }
}
