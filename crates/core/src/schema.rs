//! Declarative schemas for the provider and its data sources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{AttributePath, Diagnostics};

/// Type of a schema attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Map(Box<AttributeType>),
}

impl AttributeType {
    /// Returns true if `value` has this type. Null is accepted by every type.
    pub fn accepts(&self, value: &serde_json::Value) -> bool {
        match (self, value) {
            (_, serde_json::Value::Null) => true,
            (AttributeType::String, serde_json::Value::String(_)) => true,
            (AttributeType::Map(element), serde_json::Value::Object(map)) => {
                map.values().all(|v| element.accepts(v))
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub description: String,
    pub required: bool,
    pub computed: bool,
}

impl Attribute {
    pub fn required_string(description: impl Into<String>) -> Self {
        Self::new(AttributeType::String, description, true, false)
    }

    pub fn computed_string(description: impl Into<String>) -> Self {
        Self::new(AttributeType::String, description, false, true)
    }

    pub fn required_map(element: AttributeType, description: impl Into<String>) -> Self {
        Self::new(
            AttributeType::Map(Box::new(element)),
            description,
            true,
            false,
        )
    }

    fn new(
        attribute_type: AttributeType,
        description: impl Into<String>,
        required: bool,
        computed: bool,
    ) -> Self {
        Self {
            attribute_type,
            description: description.into(),
            required,
            computed,
        }
    }
}

/// Schema of a provider or data source configuration block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Checks a configuration object against the schema.
    ///
    /// Reports missing required attributes, values of the wrong type, values
    /// set for computed-only attributes and attributes the schema does not
    /// know about.
    pub fn validate(&self, config: &serde_json::Value) -> Diagnostics {
        let mut diags = Diagnostics::new();

        let Some(object) = config.as_object() else {
            diags.add_error(
                "Invalid Configuration",
                "Expected the configuration to be an object.",
            );
            return diags;
        };

        for (name, attribute) in &self.attributes {
            let value = object.get(name).filter(|v| !v.is_null());

            if attribute.required && value.is_none() {
                diags.add_attribute_error(
                    AttributePath::root(name),
                    "Missing required argument",
                    format!("The argument \"{}\" is required, but no definition was found.", name),
                );
            } else if attribute.computed && !attribute.required && value.is_some() {
                diags.add_attribute_error(
                    AttributePath::root(name),
                    "Invalid Configuration for Read-Only Attribute",
                    format!("Cannot set value for this attribute as the provider has marked it as read-only. Remove the configuration line setting the value for \"{}\".", name),
                );
            } else if !value.is_none_or(|v| attribute.attribute_type.accepts(v)) {
                diags.add_attribute_error(
                    AttributePath::root(name),
                    "Incorrect attribute value type",
                    format!("Inappropriate value for attribute \"{}\".", name),
                );
            }
        }

        for name in object.keys() {
            if !self.attributes.contains_key(name) {
                diags.add_attribute_error(
                    AttributePath::root(name),
                    "Unsupported argument",
                    format!("An argument named \"{}\" is not expected here.", name),
                );
            }
        }

        diags
    }
}
