use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A configuration value as handed over by the host framework.
///
/// Values are opaque to the provider; only their textual form is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ConfigValue {
    Known(String),
    Null,
}

impl ConfigValue {
    /// Creates a known string value.
    pub fn known(value: impl Into<String>) -> Self {
        ConfigValue::Known(value.into())
    }
}

impl From<Option<String>> for ConfigValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => ConfigValue::Known(s),
            None => ConfigValue::Null,
        }
    }
}

impl From<ConfigValue> for Option<String> {
    fn from(value: ConfigValue) -> Self {
        match value {
            ConfigValue::Known(s) => Some(s),
            ConfigValue::Null => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Known(value.to_string())
    }
}

/// Renders the value the way the host framework prints it: known strings
/// as a Go `%q` literal, null as `<null>`.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Known(s) => f.write_str(&quote(s)),
            ConfigValue::Null => f.write_str("<null>"),
        }
    }
}

/// Double-quotes `s` with Go `strconv.Quote` escaping.
///
/// Non-printable characters are approximated as control characters plus
/// whitespace other than the ASCII space.
fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');

    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{07}' => quoted.push_str("\\a"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0C}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{0B}' => quoted.push_str("\\v"),
            c if c == ' ' || !(c.is_control() || c.is_whitespace()) => quoted.push(c),
            c if (c as u32) < 0x80 => quoted.push_str(&format!("\\x{:02x}", c as u32)),
            c if (c as u32) < 0x10000 => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }

    quoted.push('"');
    quoted
}

/// A typed value bound to a substitution token in a filter expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpressionValue {
    String(String),
    Bool(bool),
}

/// Everything a read needs to build its scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInput {
    pub table_name: String,
    pub filter_expression: String,
    pub substitutions: HashMap<String, ConfigValue>,
}

/// Terminal result of a single read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Found { ami_id: String },
    NotFound,
    Failed { message: String },
}
