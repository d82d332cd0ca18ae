//! Schema validation
//!
//! Declarative object schemas (field name -> type, required, description)
//! checked at every boundary the orchestrator crosses: flow input, tool
//! arguments and tool output. Validation is transport-independent so it can be
//! exercised without a model client.

use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Field name reported when the candidate itself is not an object
pub const ROOT_FIELD: &str = "<root>";

/// A candidate object failed its schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid field '{field}': {reason}")]
pub struct ValidationError {
    /// Name of the offending field
    pub field: String,
    /// Human-readable reason
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for the given field
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Type of a schema field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// JSON string
    String,
    /// JSON boolean
    Boolean,
    /// JSON string restricted to a fixed set of values
    Enum(Vec<String>),
}

impl FieldType {
    fn json_type(&self) -> &'static str {
        match self {
            FieldType::String | FieldType::Enum(_) => "string",
            FieldType::Boolean => "boolean",
        }
    }
}

/// Declaration of a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as it appears on the wire
    pub name: String,
    /// Expected type
    pub field_type: FieldType,
    /// Whether the field must be present (strings must also be non-blank)
    pub required: bool,
    /// Description shown to the model in tool declarations
    pub description: String,
    /// Maximum length in characters (strings only)
    pub max_length: Option<usize>,
}

impl FieldSpec {
    /// Required string field
    pub fn string(name: &str, description: &str) -> Self {
        Self::with_type(name, FieldType::String, description)
    }

    /// Required boolean field
    pub fn boolean(name: &str, description: &str) -> Self {
        Self::with_type(name, FieldType::Boolean, description)
    }

    /// Required enum field
    pub fn enumeration(name: &str, allowed: &[&str], description: &str) -> Self {
        let allowed = allowed.iter().map(|v| v.to_string()).collect();
        Self::with_type(name, FieldType::Enum(allowed), description)
    }

    fn with_type(name: &str, field_type: FieldType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            required: true,
            description: description.to_string(),
            max_length: None,
        }
    }

    /// Mark the field as optional
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Limit string length (in characters)
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    fn check(&self, value: &Value) -> Result<(), ValidationError> {
        let fail = |reason: String| Err(ValidationError::new(&self.name, reason));

        match &self.field_type {
            FieldType::String => {
                let Some(text) = value.as_str() else {
                    return fail("expected a string".to_string());
                };
                if self.required && text.trim().is_empty() {
                    return fail("must not be empty".to_string());
                }
                if let Some(max) = self.max_length {
                    if text.chars().count() > max {
                        return fail(format!("exceeds maximum length of {} characters", max));
                    }
                }
                Ok(())
            }
            FieldType::Boolean => {
                if value.is_boolean() {
                    Ok(())
                } else {
                    fail("expected a boolean".to_string())
                }
            }
            FieldType::Enum(allowed) => match value.as_str() {
                Some(v) if allowed.iter().any(|a| a == v) => Ok(()),
                _ => fail(format!("expected one of: {}", allowed.join(", "))),
            },
        }
    }
}

/// An object schema
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (builder style)
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate a candidate and return an object holding only declared fields
    ///
    /// Fields are checked in declaration order, so the first offending field
    /// is the one reported. Undeclared fields are dropped.
    pub fn validate(&self, candidate: &Value) -> Result<Map<String, Value>, ValidationError> {
        let object = candidate
            .as_object()
            .ok_or_else(|| ValidationError::new(ROOT_FIELD, "expected a JSON object"))?;

        let mut validated = Map::new();
        for spec in &self.fields {
            match object.get(&spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        return Err(ValidationError::new(&spec.name, "is required"));
                    }
                }
                Some(value) => {
                    spec.check(value)?;
                    validated.insert(spec.name.clone(), value.clone());
                }
            }
        }
        Ok(validated)
    }

    /// Validate a candidate and deserialize it into a typed value
    pub fn validate_into<T: DeserializeOwned>(&self, candidate: &Value) -> Result<T, ValidationError> {
        let validated = self.validate(candidate)?;
        serde_json::from_value(Value::Object(validated))
            .map_err(|e| ValidationError::new(ROOT_FIELD, e.to_string()))
    }

    /// Render as a JSON object schema (the shape function declarations expect)
    pub fn to_parameters(&self) -> Value {
        let mut properties = Map::new();
        for spec in &self.fields {
            let mut property = json!({
                "type": spec.field_type.json_type(),
                "description": spec.description,
            });
            if let FieldType::Enum(allowed) = &spec.field_type {
                property["enum"] = json!(allowed);
            }
            properties.insert(spec.name.clone(), property);
        }

        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn pair_schema() -> Schema {
        Schema::new()
            .field(FieldSpec::string("originalText", "The original text").max_length(10))
            .field(FieldSpec::enumeration(
                "sourceLanguage",
                &["Nepali", "Sinhalese"],
                "Source language",
            ))
            .field(FieldSpec::boolean("flag", "Optional flag").optional())
    }

    #[test]
    fn test_validate_accepts_valid_object_and_drops_unknown_fields() {
        let schema = pair_schema();
        let validated = schema
            .validate(&json!({
                "originalText": "नमस्ते",
                "sourceLanguage": "Nepali",
                "extra": 42
            }))
            .unwrap();

        assert_eq!(validated.len(), 2);
        assert_eq!(validated["originalText"], "नमस्ते");
        assert!(!validated.contains_key("extra"));
        assert!(!validated.contains_key("flag"));
    }

    #[test]
    fn test_validate_rejects_non_object() {
        let err = pair_schema().validate(&json!("text")).unwrap_err();
        assert_eq!(err.field, ROOT_FIELD);
    }

    #[test]
    fn test_validate_names_missing_field() {
        let err = pair_schema()
            .validate(&json!({"sourceLanguage": "Nepali"}))
            .unwrap_err();
        assert_eq!(err.field, "originalText");
        assert_eq!(err.reason, "is required");
        assert_eq!(err.to_string(), "invalid field 'originalText': is required");
    }

    #[test]
    fn test_validate_rejects_blank_required_string() {
        let err = pair_schema()
            .validate(&json!({"originalText": "   ", "sourceLanguage": "Nepali"}))
            .unwrap_err();
        assert_eq!(err.field, "originalText");
        assert!(err.reason.contains("empty"));
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        // 6 Devanagari characters are 18 bytes
        assert!(pair_schema()
            .validate(&json!({"originalText": "नमस्ते", "sourceLanguage": "Nepali"}))
            .is_ok());

        let err = pair_schema()
            .validate(&json!({"originalText": "abcdefghijk", "sourceLanguage": "Nepali"}))
            .unwrap_err();
        assert!(err.reason.contains("maximum length of 10"));
    }

    #[test]
    fn test_validate_rejects_wrong_types() {
        let err = pair_schema()
            .validate(&json!({"originalText": 3, "sourceLanguage": "Nepali"}))
            .unwrap_err();
        assert_eq!(err.reason, "expected a string");

        let err = pair_schema()
            .validate(&json!({"originalText": "a", "sourceLanguage": "Tamil"}))
            .unwrap_err();
        assert_eq!(err.field, "sourceLanguage");
        assert!(err.reason.contains("Nepali, Sinhalese"));

        let err = pair_schema()
            .validate(&json!({"originalText": "a", "sourceLanguage": "Nepali", "flag": "yes"}))
            .unwrap_err();
        assert_eq!(err.field, "flag");
    }

    #[test]
    fn test_validate_into_typed_struct() {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Pair {
            original_text: String,
            source_language: String,
        }

        let pair: Pair = pair_schema()
            .validate_into(&json!({"originalText": "a", "sourceLanguage": "Sinhalese"}))
            .unwrap();
        assert_eq!(pair.original_text, "a");
        assert_eq!(pair.source_language, "Sinhalese");
    }

    #[test]
    fn test_to_parameters_shape() {
        let params = pair_schema().to_parameters();
        assert_eq!(params["type"], "object");
        assert_eq!(params["properties"]["originalText"]["type"], "string");
        assert_eq!(params["properties"]["flag"]["type"], "boolean");
        assert_eq!(
            params["properties"]["sourceLanguage"]["enum"],
            json!(["Nepali", "Sinhalese"])
        );
        assert_eq!(params["required"], json!(["originalText", "sourceLanguage"]));
    }
}
