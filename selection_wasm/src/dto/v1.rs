use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// JS/editor-facing span in UTF-16 code units.
///
/// Ranges are half-open `[start, end)`; `end` is exclusive.
#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

/// Grammar JSON accepted by the exports. Namespace order is display order.
#[derive(Deserialize, TS, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Grammar {
    #[serde(default)]
    #[ts(type = "Record<string, Array<string>>")]
    pub attributes_by_namespace: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub functions: Vec<String>,
    pub name_base: String,
}

/// Optional completion knobs.
#[derive(Deserialize, TS, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CompletionConfig {
    #[ts(optional)]
    pub max_items: Option<u32>,
    #[ts(optional)]
    pub suggest_not: Option<bool>,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestionKind {
    AttributeValue,
    Function,
    Operator,
    Namespace,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum CompletionContext {
    ExpectingSelectorOrFunction,
    ExpectingNamespaceValue { namespace: String },
    ExpectingBooleanOperator,
    InsideFunctionArgs { function: String },
    Unknown,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub text: String,
    pub kind: SuggestionKind,
    pub display_label: String,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct AutocompleteResult {
    pub items: Vec<Suggestion>,
    /// Span the accepted suggestion replaces (`from`/`to`).
    pub replace: Span,
    pub context: CompletionContext,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct ApplyResult {
    pub text: String,
    pub cursor: u32,
}

#[derive(Serialize, TS, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: String,
    pub text: String,
    pub span: Span,
}
