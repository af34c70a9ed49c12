use selection_analyzer::GrammarDescription;
use selection_ide::CompletionConfig;

use crate::converter::BoundaryError;
use crate::dto::v1::{CompletionConfig as ConfigInput, Grammar as GrammarInput};

pub(crate) fn parse_grammar(grammar_json: &str) -> Result<GrammarDescription, BoundaryError> {
    let input: GrammarInput = serde_json::from_str(grammar_json.trim()).map_err(|err| {
        tracing::debug!(%err, "grammar JSON rejected");
        BoundaryError::InvalidGrammar
    })?;

    let mut grammar = GrammarDescription::new(input.name_base);
    for (name, values) in input.attributes_by_namespace {
        let values: Vec<String> = serde_json::from_value(values).map_err(|err| {
            tracing::debug!(%err, namespace = %name, "namespace values must be strings");
            BoundaryError::InvalidGrammar
        })?;
        grammar = grammar.namespace(name, values);
    }
    for function in input.functions {
        grammar = grammar.function(function);
    }

    grammar.validate().map_err(|err| {
        tracing::debug!(%err, "grammar rejected");
        BoundaryError::InvalidGrammar
    })?;
    Ok(grammar)
}

pub(crate) fn parse_config(config_json: Option<&str>) -> Result<CompletionConfig, BoundaryError> {
    let input = match config_json.map(str::trim) {
        None | Some("") => ConfigInput::default(),
        Some(json) => serde_json::from_str(json).map_err(|err| {
            tracing::debug!(%err, "config JSON rejected");
            BoundaryError::InvalidConfig
        })?,
    };

    Ok(CompletionConfig {
        max_items: input.max_items.map(|max| max as usize),
        suggest_not: input.suggest_not.unwrap_or(false),
    })
}
