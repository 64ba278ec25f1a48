use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;

/// Failure while substituting placeholders in the raw config text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    /// Placeholder named an unset variable and gave no default
    #[error("environment variable not found: `{0}`")]
    MissingVariable(String),

    /// Placeholder used a scope other than `env.`
    #[error("only variables scoped with 'env.' are supported: `{0}`")]
    UnsupportedScope(String),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // {{ env.NAME }} or {{ env.NAME | default("value") }}
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Expand `{{ env.VAR }}` placeholders in raw TOML text
///
/// `{{ env.VAR | default("x") }}` falls back to `x` when `VAR` is unset.
/// Comment lines are left untouched so disabled settings never require
/// their variables.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let mut lines = Vec::new();

    for line in input.split('\n') {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
        } else {
            lines.push(expand_line(line)?);
        }
    }

    Ok(lines.join("\n"))
}

fn expand_line(line: &str) -> Result<String, ExpandError> {
    let mut failure = None;

    let expanded = placeholder().replace_all(line, |captures: &Captures<'_>| {
        match resolve(captures) {
            Ok(value) => value,
            Err(err) => {
                failure.get_or_insert(err);
                String::new()
            }
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(expanded.into_owned()),
    }
}

fn resolve(captures: &Captures<'_>) -> Result<String, ExpandError> {
    let key = &captures[1];
    let default = captures.get(2).map(|m| m.as_str());

    let Some(name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        return Err(ExpandError::UnsupportedScope(key.to_owned()));
    };

    match (std::env::var(name), default) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(fallback)) => Ok(fallback.to_owned()),
        (Err(_), None) => Err(ExpandError::MissingVariable(name.to_owned())),
    }
}
