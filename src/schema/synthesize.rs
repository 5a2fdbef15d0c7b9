//! Schema synthesis: turns a model's field table and nested instances into
//! a complete schema document.

use schemars::Schema;
use serde_json::{Map, Value};

use super::{FieldContent, FieldMetadata, FieldTable, FieldValue, ModelId};
use crate::{Result, SpecError};

/// Builds the schema document for one object model instance.
///
/// `base` supplies the object-level attributes, `fields` the already
/// instantiated field values (nested instances carry their own schemas).
/// The document starts as `{"type": "object", ...base, "properties": {}}`,
/// gets one property per declared field in declaration order and finally a
/// `required` list recomputed from the metadata.
///
/// # Errors
///
/// Returns `SpecError::MissingType` naming the first field that has neither
/// a nested model nor a primitive kind. An array field without an element
/// instance still gets `type: array`, just no `items`.
pub fn synthesize(
    model: ModelId,
    base: &Map<String, Value>,
    table: &FieldTable,
    fields: &[FieldValue],
) -> Result<Schema> {
    let mut document = Map::new();
    document.insert("type".into(), Value::String("object".into()));
    for (key, value) in base {
        document.insert(key.clone(), value.clone());
    }

    let mut properties = Map::new();
    for (name, metadata) in table.iter() {
        let nested = fields
            .iter()
            .find(|field| field.name() == name)
            .and_then(FieldValue::nested)
            .map(|instance| instance.schema());

        let node = synthesize_field(model, name, metadata, nested)?;
        properties.insert(name.to_string(), Value::Object(node));
    }
    document.insert("properties".into(), Value::Object(properties));

    if !table.is_empty() {
        let required = table
            .required_fields()
            .into_iter()
            .map(Value::String)
            .collect();
        document.insert("required".into(), Value::Array(required));
    }

    Ok(Schema::from(document))
}

fn synthesize_field(
    model: ModelId,
    name: &str,
    metadata: &FieldMetadata,
    nested: Option<&Schema>,
) -> Result<Map<String, Value>> {
    let mut node = metadata.annotations();

    match (metadata.content, nested) {
        (Some(FieldContent::Reference(_)), Some(child)) => Ok(merge_reference(child, node)),
        (Some(FieldContent::ArrayOf(_)), Some(item)) => {
            node.insert("type".into(), Value::String("array".into()));
            node.insert("items".into(), item.as_value().clone());
            Ok(node)
        }
        (Some(FieldContent::ArrayOf(_)), None) => {
            node.insert("type".into(), Value::String("array".into()));
            Ok(node)
        }
        (Some(FieldContent::Primitive(kind)), _) => {
            node.insert("type".into(), Value::String(kind.as_str().into()));
            Ok(node)
        }
        _ => Err(SpecError::MissingType {
            model: model.to_string(),
            field: name.to_string(),
        }),
    }
}

/// Field-level annotations win over the referenced model's keys, except
/// that two descriptions are joined, field-level text first.
fn merge_reference(child: &Schema, annotations: Map<String, Value>) -> Map<String, Value> {
    let mut combined = child.as_object().cloned().unwrap_or_default();
    let model_description = description_of(&combined);
    let field_description = description_of(&annotations);

    for (key, value) in annotations {
        combined.insert(key, value);
    }

    if let (Some(field), Some(model)) = (field_description, model_description) {
        combined.insert(
            "description".into(),
            Value::String(format!("{field}\n\n{model}")),
        );
    }

    combined
}

fn description_of(node: &Map<String, Value>) -> Option<String> {
    node.get("description")
        .and_then(Value::as_str)
        .map(str::to_owned)
}
