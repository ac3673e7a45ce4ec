pub mod tokenize;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidInput, Result};
pub use tokenize::tokenize;

// ─── Target Formats ────────────────────────────────────────────────────────

/// A naming convention to convert into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `helloWorld`
    #[value(alias = "camelCase")]
    Camel,
    /// `hello-world`
    #[value(alias = "kebab-case")]
    Kebab,
    /// `hello.world`
    #[value(alias = "dot.case")]
    Dot,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Camel, Case::Kebab, Case::Dot];

    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camel",
            Case::Kebab => "kebab",
            Case::Dot => "dot",
        }
    }

    pub fn convert(self, input: &str) -> Result<String> {
        match self {
            Case::Camel => to_camel_case(input),
            Case::Kebab => to_kebab_case(input),
            Case::Dot => to_dot_case(input),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case '{0}', expected one of: camel, kebab, dot")]
pub struct ParseCaseError(String);

impl FromStr for Case {
    type Err = ParseCaseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "camel" | "camelCase" => Ok(Case::Camel),
            "kebab" | "kebab-case" => Ok(Case::Kebab),
            "dot" | "dot.case" => Ok(Case::Dot),
            _ => Err(ParseCaseError(s.to_string())),
        }
    }
}

// ─── Conversions ───────────────────────────────────────────────────────────

/// Convert to camelCase: `"hello world"` becomes `"helloWorld"`.
pub fn to_camel_case(input: &str) -> Result<String> {
    let words = tokenize(input)?;
    let mut out = String::with_capacity(input.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_ascii_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
        }
    }
    Ok(out)
}

/// Convert to kebab-case. Input that is already kebab-case comes back as is.
pub fn to_kebab_case(input: &str) -> Result<String> {
    if is_canonical(input, '-') {
        tracing::debug!("{:?} is already kebab-case", input);
        return Ok(input.to_string());
    }
    Ok(join_lowercase(&tokenize(input)?, "-"))
}

/// Convert to dot.case. Input that is already dot.case comes back as is,
/// every other `.` is rejected.
pub fn to_dot_case(input: &str) -> Result<String> {
    if is_canonical(input, '.') {
        tracing::debug!("{:?} is already dot.case", input);
        return Ok(input.to_string());
    }
    Ok(join_lowercase(&tokenize(input)?, "."))
}

/// Convert a dynamically typed value. `null` and non-strings are rejected
/// with the matching [`InvalidInput`] reason, never coerced.
pub fn convert_value(case: Case, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => case.convert(s),
        Value::Null => Err(InvalidInput::Missing.into()),
        other => Err(InvalidInput::NotAString {
            found: json_type_name(other),
        }
        .into()),
    }
}

fn join_lowercase(words: &[&str], sep: &str) -> String {
    words
        .iter()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

/// `^[a-z0-9]+(<sep>[a-z0-9]+)*$`
fn is_canonical(input: &str, sep: char) -> bool {
    input.split(sep).all(|word| {
        !word.is_empty()
            && word
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
