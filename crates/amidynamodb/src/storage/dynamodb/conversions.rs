//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB `AttributeValue`s and the
//! core value types. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use amidynamodb_core::query::ExpressionValue;
use amidynamodb_core::storage::{Item, ItemValue};
use aws_sdk_dynamodb::types::AttributeValue;

/// Convert an expression value to its DynamoDB attribute value.
pub fn expression_value_to_attribute(value: &ExpressionValue) -> AttributeValue {
    match value {
        ExpressionValue::String(s) => AttributeValue::S(s.clone()),
        ExpressionValue::Bool(b) => AttributeValue::Bool(*b),
    }
}

/// Convert all substitution values of a scan.
pub fn expression_values_to_attributes(
    values: &HashMap<String, ExpressionValue>,
) -> HashMap<String, AttributeValue> {
    values
        .iter()
        .map(|(token, value)| (token.clone(), expression_value_to_attribute(value)))
        .collect()
}

/// Substitution values as sent with a scan.
///
/// DynamoDB rejects an empty ExpressionAttributeValues map, so no values is
/// sent as an absent map.
pub fn scan_expression_attribute_values(
    values: &HashMap<String, ExpressionValue>,
) -> Option<HashMap<String, AttributeValue>> {
    if values.is_empty() {
        return None;
    }
    Some(expression_values_to_attributes(values))
}

/// Convert a DynamoDB attribute value to an item value.
pub fn attribute_to_item_value(value: &AttributeValue) -> ItemValue {
    match value {
        AttributeValue::S(s) => ItemValue::S(s.clone()),
        AttributeValue::N(n) => ItemValue::N(n.clone()),
        AttributeValue::Bool(b) => ItemValue::Bool(*b),
        AttributeValue::Null(_) => ItemValue::Null,
        AttributeValue::B(_) => ItemValue::Unsupported("B".to_string()),
        AttributeValue::Bs(_) => ItemValue::Unsupported("BS".to_string()),
        AttributeValue::L(_) => ItemValue::Unsupported("L".to_string()),
        AttributeValue::M(_) => ItemValue::Unsupported("M".to_string()),
        AttributeValue::Ns(_) => ItemValue::Unsupported("NS".to_string()),
        AttributeValue::Ss(_) => ItemValue::Unsupported("SS".to_string()),
        _ => ItemValue::Unsupported("unknown".to_string()),
    }
}

/// Convert a DynamoDB item to an item.
pub fn attributes_to_item(item: &HashMap<String, AttributeValue>) -> Item {
    item.iter()
        .map(|(name, value)| (name.clone(), attribute_to_item_value(value)))
        .collect()
}
