use std::fmt;

use serde_json::{Map, Value};

use super::ModelId;

/// Primitive JSON Schema type a field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `"string"`
    String,
    /// `"number"`
    Number,
    /// `"boolean"`
    Boolean,
    /// `"array"`
    Array,
    /// `"object"`
    Object,
}

impl FieldKind {
    /// The JSON Schema type name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a field holds, decided when the field is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldContent {
    /// A plain value of the given kind.
    Primitive(FieldKind),
    /// A nested model, inlined into the schema at this point.
    Reference(ModelId),
    /// An array whose elements are instances of the given model.
    ArrayOf(ModelId),
}

/// Metadata attached to a single field of a model type.
///
/// Every attribute is optional so that independent declarations can be
/// stacked on the same field with [`FieldMetadata::merge`]: "mark as
/// string", "mark as required" and "set default" each set only their own
/// key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMetadata {
    /// Primitive kind or model reference.
    pub content: Option<FieldContent>,
    /// Human-readable description.
    pub description: Option<String>,
    /// Whether the field is listed in the parent's `required` set.
    pub required: Option<bool>,
    /// Default value.
    pub default: Option<Value>,
    /// Example values, in display order.
    pub examples: Option<Vec<Value>>,
    /// Allowed values, for string fields.
    pub enum_values: Option<Vec<String>>,
    /// Whether array elements must be unique.
    pub unique_items: Option<bool>,
}

impl FieldMetadata {
    /// Metadata carrying nothing; useful as a base for stacked declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// A string field.
    pub fn string(description: &str) -> Self {
        Self::primitive(FieldKind::String).with_description(description)
    }

    /// A string field restricted to `values`.
    pub fn enumeration<I, S>(values: I, description: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enum_values: Some(values.into_iter().map(Into::into).collect()),
            ..Self::string(description)
        }
    }

    /// A boolean field.
    pub fn boolean(description: &str) -> Self {
        Self::primitive(FieldKind::Boolean).with_description(description)
    }

    /// A number field.
    pub fn number(description: &str) -> Self {
        Self::primitive(FieldKind::Number).with_description(description)
    }

    /// A field of the given primitive kind, without description.
    pub fn primitive(kind: FieldKind) -> Self {
        Self {
            content: Some(FieldContent::Primitive(kind)),
            ..Self::default()
        }
    }

    /// A field holding a nested instance of `model`.
    pub fn reference(model: ModelId) -> Self {
        Self {
            content: Some(FieldContent::Reference(model)),
            ..Self::default()
        }
    }

    /// An array of `model` instances. Elements are unique unless
    /// overridden with [`FieldMetadata::unique_items`].
    pub fn array_of(model: ModelId, description: &str) -> Self {
        Self {
            content: Some(FieldContent::ArrayOf(model)),
            unique_items: Some(true),
            ..Self::default()
        }
        .with_description(description)
    }

    /// Sets the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// Sets the default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the example values.
    pub fn examples<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.examples = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether array elements must be unique.
    pub fn unique_items(mut self, unique: bool) -> Self {
        self.unique_items = Some(unique);
        self
    }

    /// Shallow merge: every key set on `other` replaces the same key here,
    /// keys `other` leaves unset are kept.
    pub fn merge(&mut self, other: FieldMetadata) {
        let FieldMetadata {
            content,
            description,
            required,
            default,
            examples,
            enum_values,
            unique_items,
        } = other;

        if content.is_some() {
            self.content = content;
        }
        if description.is_some() {
            self.description = description;
        }
        if required.is_some() {
            self.required = required;
        }
        if default.is_some() {
            self.default = default;
        }
        if examples.is_some() {
            self.examples = examples;
        }
        if enum_values.is_some() {
            self.enum_values = enum_values;
        }
        if unique_items.is_some() {
            self.unique_items = unique_items;
        }
    }

    /// Whether the field was marked required.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// The model this field references, for single and array references.
    pub fn referenced_model(&self) -> Option<ModelId> {
        match self.content {
            Some(FieldContent::Reference(model)) | Some(FieldContent::ArrayOf(model)) => {
                Some(model)
            }
            _ => None,
        }
    }

    /// Descriptive keys as schema attributes, in output order. Unset keys
    /// are left out entirely.
    pub(crate) fn annotations(&self) -> Map<String, Value> {
        let mut node = Map::new();

        if let Some(description) = &self.description {
            node.insert("description".into(), Value::String(description.clone()));
        }
        if let Some(values) = &self.enum_values {
            node.insert(
                "enum".into(),
                Value::Array(values.iter().cloned().map(Value::String).collect()),
            );
        }
        if let Some(unique) = self.unique_items {
            node.insert("uniqueItems".into(), Value::Bool(unique));
        }
        if let Some(default) = &self.default {
            node.insert("default".into(), default.clone());
        }
        if let Some(examples) = &self.examples {
            node.insert("examples".into(), Value::Array(examples.clone()));
        }

        node
    }
}
