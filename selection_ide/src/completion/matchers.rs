//! Prefix matching of a typed query against completion labels.
//!
//! Matching is case-insensitive (Unicode lowercase); insertion text keeps the grammar's casing.

/// How well a label matches the typed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum MatchClass {
    /// The label (minus its `:` / `()` suffix) equals the query.
    Exact,
    /// The label starts with the query.
    Prefix,
    None,
}

pub(super) fn match_class(query: &str, label: &str) -> MatchClass {
    if query.is_empty() {
        return MatchClass::Prefix;
    }
    let query = query.to_lowercase();
    let label = label.to_lowercase();
    if label_stem(&label) == query {
        return MatchClass::Exact;
    }
    if label.starts_with(&query) {
        return MatchClass::Prefix;
    }
    MatchClass::None
}

/// Strips the syntax a label carries beyond its name: `tag:` → `tag`, `sinks()` → `sinks`.
pub(super) fn label_stem(label: &str) -> &str {
    label
        .strip_suffix("()")
        .or_else(|| label.strip_suffix(':'))
        .unwrap_or(label)
}
