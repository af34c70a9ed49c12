//! Conversion utilities for the WASM/JS boundary.
//!
//! Stateless. Parses caller JSON into core types, bridges UTF-16 and byte offsets, and turns
//! core results into `dto::v1` views. No completion logic lives here.

mod completion;
mod grammar;

use selection_analyzer::GrammarDescription;
use selection_ide::{ApplyResult, AutocompleteResult, CompletionConfig};

use crate::dto::v1::{
    ApplyResult as ApplyResultDto, AutocompleteResult as AutocompleteResultDto, Token,
};
use crate::offsets::utf16_offset_to_byte;

/// Failures at the JS boundary. The core itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {
    InvalidGrammar,
    InvalidConfig,
}

impl BoundaryError {
    pub fn message(self) -> &'static str {
        match self {
            BoundaryError::InvalidGrammar => "Invalid grammar JSON",
            BoundaryError::InvalidConfig => "Invalid config JSON",
        }
    }
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for BoundaryError {}

pub struct Converter;

impl Converter {
    /// Parse the JS-provided grammar JSON into a validated `GrammarDescription`.
    pub fn parse_grammar(grammar_json: &str) -> Result<GrammarDescription, BoundaryError> {
        grammar::parse_grammar(grammar_json)
    }

    /// Parse the optional config JSON. Absent or blank input means the defaults.
    pub fn parse_config(config_json: Option<&str>) -> Result<CompletionConfig, BoundaryError> {
        grammar::parse_config(config_json)
    }

    /// Convert a UTF-16 cursor offset (JS) to a byte offset (Rust strings).
    pub fn cursor_utf16_to_byte(source: &str, cursor_utf16: u32) -> usize {
        utf16_offset_to_byte(source, cursor_utf16 as usize)
    }

    pub fn autocomplete_result_view(
        source: &str,
        result: &AutocompleteResult,
    ) -> AutocompleteResultDto {
        completion::autocomplete_result_view(source, result)
    }

    /// `applied.text` is the post-edit text; the cursor is converted against it.
    pub fn apply_result_view(applied: &ApplyResult) -> ApplyResultDto {
        completion::apply_result_view(applied)
    }

    pub fn token_views(source: &str) -> Vec<Token> {
        completion::token_views(source)
    }
}
