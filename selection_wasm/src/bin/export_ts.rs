use std::fs;
use std::path::PathBuf;

use selection_wasm::dto::v1::{
    ApplyResult, AutocompleteResult, CompletionConfig, CompletionContext, Grammar, Span,
    Suggestion, SuggestionKind, Token,
};
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../web/src/selection/generated/selection_dto.ts");
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut out = String::new();
    out.push_str("/* eslint-disable */\n");
    out.push_str("/* prettier-ignore */\n");
    out.push_str("// AUTO-GENERATED: `cargo run -p selection_wasm --bin export_ts`\n\n");

    for decl in [
        Grammar::decl(),
        CompletionConfig::decl(),
        Span::decl(),
        SuggestionKind::decl(),
        Suggestion::decl(),
        CompletionContext::decl(),
        AutocompleteResult::decl(),
        ApplyResult::decl(),
        Token::decl(),
    ] {
        let decl = export_decl(decl);
        out.push_str(&decl);
        if !decl.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }

    fs::write(&out_path, out)?;
    Ok(())
}

fn export_decl(mut decl: String) -> String {
    let trimmed = decl.trim_start();
    if trimmed.starts_with("export ") {
        return decl;
    }
    if ["type ", "interface ", "enum ", "declare "]
        .iter()
        .any(|keyword| trimmed.starts_with(keyword))
    {
        decl.insert_str(decl.len() - trimmed.len(), "export ");
    }
    decl
}
