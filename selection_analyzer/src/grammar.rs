//! The grammar description completions are drawn from.
//!
//! Declaration order is display order everywhere: namespaces, their values, and functions are
//! kept in `Vec`s, never re-sorted.

use serde::{Deserialize, Serialize};

/// A namespace such as `tag` together with its known values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GrammarDescription {
    pub namespaces: Vec<Namespace>,
    pub functions: Vec<String>,
    /// The namespace whose values may be written bare, without a `name_base:` prefix.
    pub name_base: String,
}

impl GrammarDescription {
    pub fn new(name_base: impl Into<String>) -> Self {
        Self {
            namespaces: Vec::new(),
            functions: Vec::new(),
            name_base: name_base.into(),
        }
    }

    /// Adds a namespace, or appends to the values of an existing one with the same name.
    pub fn namespace<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let values = values.into_iter().map(Into::into);
        match self.namespaces.iter_mut().find(|ns| ns.name == name) {
            Some(ns) => ns.values.extend(values),
            None => self.namespaces.push(Namespace {
                name,
                values: values.collect(),
            }),
        }
        self
    }

    pub fn function(mut self, name: impl Into<String>) -> Self {
        self.functions.push(name.into());
        self
    }

    /// Looks up a namespace by key, preferring an exact match over an ASCII-case-insensitive one.
    pub fn lookup(&self, name: &str) -> Option<&Namespace> {
        self.namespaces
            .iter()
            .find(|ns| ns.name == name)
            .or_else(|| {
                self.namespaces
                    .iter()
                    .find(|ns| ns.name.eq_ignore_ascii_case(name))
            })
    }

    pub fn lookup_function(&self, name: &str) -> Option<&str> {
        self.functions
            .iter()
            .find(|func| func.as_str() == name)
            .or_else(|| {
                self.functions
                    .iter()
                    .find(|func| func.eq_ignore_ascii_case(name))
            })
            .map(String::as_str)
    }

    /// Values usable without a namespace prefix.
    pub fn name_base_values(&self) -> &[String] {
        if self.name_base.is_empty() {
            return &[];
        }
        self.lookup(&self.name_base)
            .map(|ns| ns.values.as_slice())
            .unwrap_or(&[])
    }

    /// Checks the non-empty-name invariants.
    pub fn validate(&self) -> Result<(), GrammarError> {
        if self.name_base.is_empty() {
            return Err(GrammarError::EmptyNameBase);
        }
        if self.namespaces.iter().any(|ns| ns.name.is_empty()) {
            return Err(GrammarError::EmptyNamespace);
        }
        if self.functions.iter().any(String::is_empty) {
            return Err(GrammarError::EmptyFunction);
        }
        Ok(())
    }
}

/// Violations of [`GrammarDescription`] invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarError {
    EmptyNameBase,
    EmptyNamespace,
    EmptyFunction,
}

impl GrammarError {
    pub fn message(self) -> &'static str {
        match self {
            GrammarError::EmptyNameBase => "Name base must not be empty",
            GrammarError::EmptyNamespace => "Namespace names must not be empty",
            GrammarError::EmptyFunction => "Function names must not be empty",
        }
    }
}

impl std::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for GrammarError {}
