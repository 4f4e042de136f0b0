//! Coercion of configuration values into typed expression values.
//!
//! Pure functions, no I/O.

use std::collections::HashMap;

use super::types::{ConfigValue, ExpressionValue};

/// Parses a boolean literal. Only `true` and `false` are accepted.
pub fn parse_bool_literal(text: &str) -> Option<bool> {
    match text {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Coerces the textual form of a value.
///
/// Double quotes are stripped first. A literal `true` becomes `Bool(true)`;
/// everything else, `false` included, stays a string.
pub fn coerce_text(text: &str) -> ExpressionValue {
    let text = text.replace('"', "");

    match parse_bool_literal(&text) {
        Some(true) => ExpressionValue::Bool(true),
        _ => ExpressionValue::String(text),
    }
}

/// Coerces a single configuration value through its quoted textual form.
pub fn coerce_value(value: &ConfigValue) -> ExpressionValue {
    coerce_text(&value.to_string())
}

/// Coerces every substitution value, keeping the tokens as-is.
pub fn coerce_expression_attribute_values(
    values: &HashMap<String, ConfigValue>,
) -> HashMap<String, ExpressionValue> {
    values
        .iter()
        .map(|(token, value)| (token.clone(), coerce_value(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_literal_accepts_only_lowercase_words() {
        assert_eq!(parse_bool_literal("true"), Some(true));
        assert_eq!(parse_bool_literal("false"), Some(false));
        assert_eq!(parse_bool_literal("True"), None);
        assert_eq!(parse_bool_literal("TRUE"), None);
        assert_eq!(parse_bool_literal("1"), None);
        assert_eq!(parse_bool_literal("t"), None);
        assert_eq!(parse_bool_literal(""), None);
    }

    #[test]
    fn test_true_becomes_bool() {
        assert_eq!(
            coerce_value(&ConfigValue::known("true")),
            ExpressionValue::Bool(true)
        );
    }

    #[test]
    fn test_false_stays_a_string() {
        assert_eq!(
            coerce_value(&ConfigValue::known("false")),
            ExpressionValue::String("false".to_string())
        );
    }

    #[test]
    fn test_non_boolean_text_becomes_string() {
        assert_eq!(
            coerce_value(&ConfigValue::known("ami-123")),
            ExpressionValue::String("ami-123".to_string())
        );
        assert_eq!(
            coerce_value(&ConfigValue::known("TRUE")),
            ExpressionValue::String("TRUE".to_string())
        );
    }

    #[test]
    fn test_quoted_text_coerces_like_bare_text() {
        assert_eq!(coerce_text("\"abc\""), coerce_text("abc"));
        assert_eq!(coerce_text("\"true\""), ExpressionValue::Bool(true));
        assert_eq!(
            coerce_text("\"false\""),
            ExpressionValue::String("false".to_string())
        );
    }

    #[test]
    fn test_inner_quotes_leave_their_escapes() {
        assert_eq!(
            coerce_value(&ConfigValue::known("say \"hi\"")),
            ExpressionValue::String(r"say \hi\".to_string())
        );
        assert_eq!(
            coerce_value(&ConfigValue::known("\"abc\"")),
            ExpressionValue::String(r"\abc\".to_string())
        );
    }

    #[test]
    fn test_backslashes_are_escaped() {
        assert_eq!(
            coerce_value(&ConfigValue::known(r"C:\ami")),
            ExpressionValue::String(r"C:\\ami".to_string())
        );
    }

    #[test]
    fn test_control_characters_are_escaped() {
        assert_eq!(
            coerce_value(&ConfigValue::known("a\nb")),
            ExpressionValue::String(r"a\nb".to_string())
        );
        assert_eq!(
            coerce_value(&ConfigValue::known("a\tb")),
            ExpressionValue::String(r"a\tb".to_string())
        );
    }

    #[test]
    fn test_null_coerces_to_its_marker() {
        assert_eq!(
            coerce_value(&ConfigValue::Null),
            ExpressionValue::String("<null>".to_string())
        );
    }

    #[test]
    fn test_coerce_map_keeps_tokens() {
        let values = HashMap::from([
            (":ami".to_string(), ConfigValue::known("ami-123")),
            (":active".to_string(), ConfigValue::known("true")),
            (":retired".to_string(), ConfigValue::known("false")),
        ]);

        let coerced = coerce_expression_attribute_values(&values);

        assert_eq!(coerced.len(), 3);
        assert_eq!(
            coerced[":ami"],
            ExpressionValue::String("ami-123".to_string())
        );
        assert_eq!(coerced[":active"], ExpressionValue::Bool(true));
        assert_eq!(
            coerced[":retired"],
            ExpressionValue::String("false".to_string())
        );
    }

    #[test]
    fn test_coerce_empty_map() {
        assert!(coerce_expression_attribute_values(&HashMap::new()).is_empty());
    }
}
