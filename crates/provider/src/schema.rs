//! Schema types describing provider configuration, resources and data sources.
//!
//! The host uses these to validate configuration and render documentation.
//! [`Schema::validate`] performs the checks the provider itself relies on:
//! required attributes present and scalar types matching.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, Result};

/// The type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
    Bool,
}

impl AttributeType {
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Int64 => value.is_i64() || value.is_u64(),
            Self::Bool => value.is_boolean(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int64 => "int64",
            Self::Bool => "bool",
        }
    }
}

/// Describes how an attribute can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttributeFlags {
    /// Must be set in configuration.
    pub required: bool,
    /// May be set in configuration.
    pub optional: bool,
    /// Set by the provider from the remote record.
    pub computed: bool,
    /// Hidden in host output.
    pub sensitive: bool,
}

impl AttributeFlags {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Default::default()
        }
    }

    pub fn optional() -> Self {
        Self {
            optional: true,
            ..Default::default()
        }
    }

    pub fn computed() -> Self {
        Self {
            computed: true,
            ..Default::default()
        }
    }

    /// Settable, with a value the provider fills in when unset.
    pub fn optional_computed() -> Self {
        Self {
            optional: true,
            computed: true,
            ..Default::default()
        }
    }
}

/// A single attribute in a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    #[serde(flatten)]
    pub flags: AttributeFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Changing this attribute forces the resource to be replaced.
    #[serde(default)]
    pub force_new: bool,
}

impl Attribute {
    pub fn new(attr_type: AttributeType, flags: AttributeFlags) -> Self {
        Self {
            attr_type,
            flags,
            description: None,
            force_new: false,
        }
    }

    pub fn required_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::required())
    }

    pub fn optional_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::optional())
    }

    pub fn computed_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::computed())
    }

    pub fn required_int64() -> Self {
        Self::new(AttributeType::Int64, AttributeFlags::required())
    }

    pub fn optional_int64() -> Self {
        Self::new(AttributeType::Int64, AttributeFlags::optional())
    }

    pub fn computed_int64() -> Self {
        Self::new(AttributeType::Int64, AttributeFlags::computed())
    }

    pub fn optional_bool() -> Self {
        Self::new(AttributeType::Bool, AttributeFlags::optional())
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.flags.sensitive = true;
        self
    }

    /// Optional in configuration, filled from the remote record otherwise.
    pub fn computed(mut self) -> Self {
        self.flags.computed = true;
        self
    }
}

/// Schema for a resource, data source or the provider block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Schema {
    /// Bumped when stored state changes shape.
    #[serde(default)]
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn v0() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.attributes.insert(name.into(), attr);
        self
    }

    /// Check `value` against this schema.
    ///
    /// Missing required attributes are reported by name, all at once.
    /// Computed-only attributes are not checked; unknown keys are left to
    /// typed deserialization.
    pub fn validate(&self, value: &Value) -> Result<()> {
        let Some(object) = value.as_object() else {
            return Err(ProviderError::Validation(
                "expected an object of attributes".to_string(),
            ));
        };

        let mut problems = Vec::new();
        for (name, attr) in &self.attributes {
            if attr.flags.computed && !attr.flags.optional && !attr.flags.required {
                continue;
            }
            match object.get(name) {
                None | Some(Value::Null) => {
                    if attr.flags.required {
                        problems.push(format!("missing required attribute '{}'", name));
                    }
                }
                Some(v) if !attr.attr_type.matches(v) => {
                    problems.push(format!(
                        "attribute '{}' must be {}",
                        name,
                        attr.attr_type.name()
                    ));
                }
                Some(_) => {}
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ProviderError::Validation(problems.join("; ")))
        }
    }
}

/// Everything the provider declares to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProviderSchema {
    #[serde(default)]
    pub provider: Schema,
    #[serde(default)]
    pub resources: BTreeMap<String, Schema>,
    #[serde(default)]
    pub data_sources: BTreeMap<String, Schema>,
}

impl ProviderSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider_config(mut self, schema: Schema) -> Self {
        self.provider = schema;
        self
    }

    pub fn with_resource(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.resources.insert(name.into(), schema);
        self
    }

    pub fn with_data_source(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.data_sources.insert(name.into(), schema);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Schema {
        Schema::v0()
            .with_attribute("id", Attribute::computed_int64())
            .with_attribute("name", Attribute::required_string())
            .with_attribute("scope", Attribute::required_string())
            .with_attribute("enabled", Attribute::optional_bool())
    }

    #[test]
    fn test_attribute_flags() {
        let required = AttributeFlags::required();
        assert!(required.required && !required.optional && !required.computed);

        let oc = AttributeFlags::optional_computed();
        assert!(oc.optional && oc.computed && !oc.required);

        let secret = Attribute::optional_string().sensitive();
        assert!(secret.flags.sensitive);
    }

    #[test]
    fn test_validate_accepts_complete_input() {
        let input = json!({"name": "n", "scope": "_sourceCategory=x", "enabled": false});
        assert!(sample().validate(&input).is_ok());
    }

    #[test]
    fn test_validate_names_every_missing_attribute() {
        let err = sample().validate(&json!({"enabled": true})).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'name'"), "{}", msg);
        assert!(msg.contains("'scope'"), "{}", msg);
    }

    #[test]
    fn test_validate_null_counts_as_missing() {
        let err = sample()
            .validate(&json!({"name": null, "scope": "s"}))
            .unwrap_err();
        assert!(err.to_string().contains("missing required attribute 'name'"));
    }

    #[test]
    fn test_validate_type_mismatch() {
        let err = sample()
            .validate(&json!({"name": "n", "scope": "s", "enabled": "yes"}))
            .unwrap_err();
        assert!(err.to_string().contains("attribute 'enabled' must be bool"));
    }

    #[test]
    fn test_validate_skips_computed_only() {
        let input = json!({"id": "not-a-number", "name": "n", "scope": "s"});
        assert!(sample().validate(&input).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_object() {
        assert!(matches!(
            sample().validate(&json!([1, 2])),
            Err(ProviderError::Validation(_))
        ));
    }

    #[test]
    fn test_provider_schema_serializes_type_names() {
        let schema = ProviderSchema::new().with_resource("thing", sample());
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["resources"]["thing"]["attributes"]["name"]["type"], "string");
        assert_eq!(value["resources"]["thing"]["attributes"]["name"]["required"], true);
    }
}
