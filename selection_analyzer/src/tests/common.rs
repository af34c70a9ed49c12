use crate::{Token, TokenKind, tokenize};

/// Routes `tracing` output to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn kind_name(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Ident(_) => "Ident".to_string(),
        TokenKind::Operator(op) => format!("Operator({op:?})"),
        TokenKind::Colon => "Colon".to_string(),
        TokenKind::OpenParen => "OpenParen".to_string(),
        TokenKind::CloseParen => "CloseParen".to_string(),
        TokenKind::Whitespace => "Whitespace".to_string(),
        TokenKind::Str {
            terminated: true, ..
        } => "Str".to_string(),
        TokenKind::Str {
            terminated: false, ..
        } => "Str(unterminated)".to_string(),
        TokenKind::Unknown(_) => "Unknown".to_string(),
    }
}

/// One token per line: `Kind "text" start..end`.
pub fn dump_tokens(source: &str) -> String {
    init_tracing();
    tokenize(source)
        .iter()
        .map(|token: &Token| {
            format!(
                "{} {:?} {}..{}",
                kind_name(&token.kind),
                token.text(source),
                token.span.start,
                token.span.end
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
