use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::query::ExpressionValue;

/// A single attribute value of a stored item.
///
/// This is a backend-agnostic view of the attribute types the provider cares
/// about. Anything else is kept as `Unsupported` with the type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemValue {
    S(String),
    N(String),
    Bool(bool),
    Null,
    Unsupported(String),
}

impl ItemValue {
    /// Returns the string payload if this is an `S` value.
    pub fn as_s(&self) -> Option<&str> {
        match self {
            ItemValue::S(s) => Some(s),
            _ => None,
        }
    }
}

/// A stored item: attribute name to value.
pub type Item = HashMap<String, ItemValue>;

/// A filtered scan against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub table_name: String,
    /// Passed to the store verbatim; the store reports parse errors.
    pub filter_expression: String,
    pub expression_attribute_values: HashMap<String, ExpressionValue>,
    pub expression_attribute_names: Option<HashMap<String, String>>,
    pub projection_expression: Option<String>,
}

impl ScanRequest {
    /// Creates a scan with no attribute-name aliasing and no projection.
    pub fn new(
        table_name: impl Into<String>,
        filter_expression: impl Into<String>,
        expression_attribute_values: HashMap<String, ExpressionValue>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            filter_expression: filter_expression.into(),
            expression_attribute_values,
            expression_attribute_names: None,
            projection_expression: None,
        }
    }
}
