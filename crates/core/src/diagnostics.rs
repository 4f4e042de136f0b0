//! Diagnostics reported back to the host framework.
//!
//! A diagnostic is a structured warning or error attached to a response, as
//! opposed to a failure of the call itself.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Path to an attribute in a configuration block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributePath(Vec<String>);

impl AttributePath {
    /// Path to a top-level attribute.
    pub fn root(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<AttributePath>,
}

/// An ordered collection of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Severity::Error, summary, detail, None);
    }

    pub fn add_warning(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Severity::Warning, summary, detail, None);
    }

    pub fn add_attribute_error(
        &mut self,
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.push(Severity::Error, summary, detail, Some(path));
    }

    pub fn append(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    fn push(
        &mut self,
        severity: Severity,
        summary: impl Into<String>,
        detail: impl Into<String>,
        attribute: Option<AttributePath>,
    ) {
        self.0.push(Diagnostic {
            severity,
            summary: summary.into(),
            detail: detail.into(),
            attribute,
        });
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_are_not_errors() {
        let mut diags = Diagnostics::new();
        diags.add_warning("No matching items found in the DynamoDB table.", "");

        assert!(!diags.has_error());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_attribute_error_keeps_path() {
        let mut diags = Diagnostics::new();
        diags.add_attribute_error(AttributePath::root("region"), "Missing AWS Region", "");

        assert!(diags.has_error());
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.attribute.as_ref().unwrap().to_string(), "region");
    }

    #[test]
    fn test_append_preserves_order() {
        let mut first = Diagnostics::new();
        first.add_warning("a", "");
        let mut second = Diagnostics::new();
        second.add_error("b", "");

        first.append(second);

        let summaries: Vec<_> = first.iter().map(|d| d.summary.as_str()).collect();
        assert_eq!(summaries, vec!["a", "b"]);
    }

    #[test]
    fn test_root_path_display() {
        assert_eq!(AttributePath::root("region").to_string(), "region");
    }

    #[test]
    fn test_serializes_severity_lowercase() {
        let mut diags = Diagnostics::new();
        diags.add_error("Unable to Read Item", "timeout");

        let json = serde_json::to_value(&diags).unwrap();

        assert_eq!(json[0]["severity"], "error");
        assert_eq!(json[0]["detail"], "timeout");
        assert!(json[0].get("attribute").is_none());
    }
}
