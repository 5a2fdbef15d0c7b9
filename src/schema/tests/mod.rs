//! Unit tests for schema module
//!
//! Tests metadata merging, registry inheritance and schema synthesis.

#![allow(clippy::panic, clippy::unwrap_used)]

use schemars::json_schema;
use serde_json::json;

use crate::{
    SpecError,
    schema::{
        Catalog, CatalogBuilder, FieldKind, FieldMetadata, FieldTable, MetadataRegistry, ModelId,
        TaploExtension, synthesize,
    },
};

const PACK: ModelId = ModelId::new("Pack");
const ENTRY: ModelId = ModelId::new("Entry");
const TAG: ModelId = ModelId::new("Tag");

fn entries_catalog() -> Catalog {
    let mut builder = CatalogBuilder::new();
    builder
        .object(PACK, json_schema!({ "description": "A pack" }))
        .declare(PACK, "name", FieldMetadata::string("Pack name").required())
        .declare(
            PACK,
            "entries",
            FieldMetadata::array_of(ENTRY, "Entries of the pack"),
        )
        .object(ENTRY, json_schema!({ "description": "One entry" }))
        .declare(ENTRY, "file", FieldMetadata::string("Path").required())
        .declare(
            ENTRY,
            "preserve",
            FieldMetadata::boolean("Keep local edits").default_value(false),
        )
        .object(TAG, json_schema!({ "description": "Tag data" }))
        .declare(TAG, "label", FieldMetadata::string("Label"));
    builder.build()
}

#[test]
fn stacked_declarations_merge() {
    let mut registry = MetadataRegistry::new();
    registry.declare(PACK, "hash-format", FieldMetadata::string("Hash format"));
    registry.declare(PACK, "hash-format", FieldMetadata::new().required());
    registry.declare(
        PACK,
        "hash-format",
        FieldMetadata::new().default_value("sha256"),
    );

    let table = registry.lookup(PACK);
    let metadata = table.get("hash-format").unwrap();

    assert_eq!(table.len(), 1);
    assert!(metadata.is_required());
    assert_eq!(metadata.default, Some(json!("sha256")));
    assert_eq!(metadata.description.as_deref(), Some("Hash format"));
}

#[test]
fn later_kind_wins() {
    let mut builder = CatalogBuilder::new();
    builder
        .object(PACK, json_schema!({}))
        .declare(PACK, "size", FieldMetadata::string("Size"))
        .declare(PACK, "size", FieldMetadata::primitive(FieldKind::Number));
    let catalog = builder.build();

    let metadata = catalog.registry().lookup(PACK).get("size").unwrap();
    let schema = catalog.schema_for(PACK).unwrap();

    assert_eq!(metadata.description.as_deref(), Some("Size"));
    assert_eq!(schema.get("properties").unwrap()["size"]["type"], "number");
}

#[test]
fn lookup_undeclared_model_is_empty() {
    let registry = MetadataRegistry::new();

    assert!(registry.lookup(TAG).is_empty());
    assert!(!registry.contains(TAG));
}

#[test]
fn extend_inherits_and_overrides() {
    let mut registry = MetadataRegistry::new();
    registry.declare(ENTRY, "file", FieldMetadata::string("Path").required());
    registry.declare(ENTRY, "hash", FieldMetadata::string("Hash"));
    registry.declare(TAG, "hash", FieldMetadata::new().with_description("Legacy hash"));
    registry.extend(ENTRY, TAG);
    registry.declare(TAG, "extra", FieldMetadata::string("Extra"));

    let derived = registry.lookup(TAG);
    let base = registry.lookup(ENTRY);

    assert_eq!(derived.names(), vec!["file", "hash", "extra"]);
    assert!(derived.get("file").unwrap().is_required());
    assert_eq!(
        derived.get("hash").unwrap().description.as_deref(),
        Some("Legacy hash")
    );
    assert_eq!(base.get("hash").unwrap().description.as_deref(), Some("Hash"));
    assert!(base.get("extra").is_none());
}

#[test]
fn required_lists_exactly_flagged_fields() {
    let catalog = entries_catalog();

    let schema = catalog.schema_for(ENTRY).unwrap();

    assert_eq!(schema.get("required"), Some(&json!(["file"])));
}

#[test]
fn primitive_field_without_default_has_no_default_key() {
    let catalog = entries_catalog();

    let schema = catalog.schema_for(ENTRY).unwrap();
    let properties = schema.get("properties").unwrap();

    assert_eq!(
        properties["file"],
        json!({ "description": "Path", "type": "string" })
    );
    assert_eq!(properties["preserve"]["default"], json!(false));
    assert_eq!(properties["preserve"]["type"], "boolean");
}

#[test]
fn object_attributes_come_from_base() {
    let catalog = entries_catalog();

    let schema = catalog.schema_for(PACK).unwrap();
    let keys: Vec<&String> = schema.as_object().unwrap().keys().collect();

    assert_eq!(keys, vec!["type", "description", "properties", "required"]);
    assert_eq!(schema.get("type"), Some(&json!("object")));
    assert_eq!(schema.get("description"), Some(&json!("A pack")));
}

#[test]
fn property_keys_follow_annotation_order() {
    let mut builder = CatalogBuilder::new();
    builder.object(PACK, json_schema!({})).declare(
        PACK,
        "side",
        FieldMetadata::enumeration(["client", "server"], "Side")
            .default_value("both")
            .examples(["client"]),
    );
    let schema = builder.build().schema_for(PACK).unwrap();

    let side = schema.get("properties").unwrap()["side"].as_object().unwrap();
    let keys: Vec<&String> = side.keys().collect();

    assert_eq!(keys, vec!["description", "enum", "default", "examples", "type"]);
}

#[test]
fn array_items_are_the_element_schema() {
    let catalog = entries_catalog();

    let pack = catalog.schema_for(PACK).unwrap();
    let entry = catalog.schema_for(ENTRY).unwrap();
    let entries = &pack.get("properties").unwrap()["entries"];

    assert_eq!(entries["type"], "array");
    assert_eq!(entries["uniqueItems"], true);
    assert_eq!(&entries["items"], entry.as_value());
}

#[test]
fn array_element_instances_are_independent() {
    let catalog = entries_catalog();

    let first = catalog.instantiate(PACK).unwrap();
    let mut edited = first.schema().as_value().clone();
    edited["properties"]["entries"]["items"]["description"] = json!("changed");

    let nested = first.field("entries").unwrap().nested().unwrap();
    let fresh = catalog.schema_for(PACK).unwrap();

    assert_eq!(nested.model(), ENTRY);
    assert_eq!(nested.schema().get("description"), Some(&json!("One entry")));
    assert_eq!(
        fresh.as_value()["properties"]["entries"]["items"]["description"],
        "One entry"
    );
}

#[test]
fn reference_merges_descriptions_field_first() {
    let mut builder = CatalogBuilder::new();
    builder
        .object(PACK, json_schema!({}))
        .declare(
            PACK,
            "tag",
            FieldMetadata::reference(TAG).with_description("Field text"),
        )
        .object(TAG, json_schema!({ "description": "Model text" }))
        .declare(TAG, "label", FieldMetadata::string("Label"));
    let schema = builder.build().schema_for(PACK).unwrap();

    let tag = &schema.get("properties").unwrap()["tag"];

    assert_eq!(tag["description"], "Field text\n\nModel text");
    assert_eq!(tag["type"], "object");
    assert_eq!(tag["properties"]["label"]["type"], "string");
}

#[test]
fn reference_keeps_model_description_when_field_has_none() {
    let mut builder = CatalogBuilder::new();
    builder
        .object(PACK, json_schema!({}))
        .declare(PACK, "tag", FieldMetadata::reference(TAG).default_value(json!({})))
        .object(TAG, json_schema!({ "description": "Model text" }));
    let schema = builder.build().schema_for(PACK).unwrap();

    let tag = &schema.get("properties").unwrap()["tag"];

    assert_eq!(tag["description"], "Model text");
    assert_eq!(tag["default"], json!({}));
}

#[test]
fn fixed_model_schema_used_verbatim() {
    let mut builder = CatalogBuilder::new();
    builder
        .object(PACK, json_schema!({}))
        .declare(PACK, "format", FieldMetadata::reference(TAG).required())
        .fixed(
            TAG,
            json_schema!({ "type": "string", "pattern": "^packwiz:\\d+\\.\\d+\\.\\d+$" }),
        );
    let schema = builder.build().schema_for(PACK).unwrap();

    let format = &schema.get("properties").unwrap()["format"];

    assert_eq!(format["type"], "string");
    assert!(format.get("required").is_none());
    assert_eq!(schema.get("required"), Some(&json!(["format"])));
}

#[test]
fn model_without_fields_omits_required() {
    let mut builder = CatalogBuilder::new();
    builder.object(TAG, json_schema!({ "description": "Empty" }));
    let schema = builder.build().schema_for(TAG).unwrap();

    assert_eq!(schema.get("properties"), Some(&json!({})));
    assert!(schema.get("required").is_none());
}

#[test]
fn synthesis_is_idempotent() {
    let catalog = entries_catalog();

    let first = catalog.schema_for(PACK).unwrap();
    let second = catalog.schema_for(PACK).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn missing_type_names_the_field() {
    let mut builder = CatalogBuilder::new();
    builder
        .object(PACK, json_schema!({}))
        .declare(PACK, "name", FieldMetadata::string("Name"))
        .declare(PACK, "mystery", FieldMetadata::new().with_description("?"));

    let Err(SpecError::MissingType { model, field }) = builder.build().schema_for(PACK) else {
        panic!("expected a missing type error");
    };

    assert_eq!(model, "Pack");
    assert_eq!(field, "mystery");
}

#[test]
fn unknown_model_reports_origin() {
    let mut builder = CatalogBuilder::new();
    builder
        .object(PACK, json_schema!({}))
        .declare(PACK, "tag", FieldMetadata::reference(TAG));

    let Err(SpecError::UnknownModel {
        model,
        referenced_by,
    }) = builder.build().schema_for(PACK)
    else {
        panic!("expected an unknown model error");
    };

    assert_eq!(model, "Tag");
    assert_eq!(referenced_by, "Pack.tag");
}

#[test]
fn recursive_reference_is_rejected() {
    let mut builder = CatalogBuilder::new();
    builder
        .object(PACK, json_schema!({}))
        .declare(PACK, "entries", FieldMetadata::array_of(ENTRY, "Entries"))
        .object(ENTRY, json_schema!({}))
        .declare(ENTRY, "parent", FieldMetadata::reference(PACK));

    let result = builder.build().schema_for(PACK);

    let Err(error @ SpecError::RecursiveModel { .. }) = result else {
        panic!("expected a recursive model error");
    };
    assert!(error.is_declaration_defect());
    assert!(error.to_string().contains("Pack -> Entry -> Pack"));
}

#[test]
fn shared_model_referenced_twice_is_not_recursive() {
    let mut builder = CatalogBuilder::new();
    builder
        .object(PACK, json_schema!({}))
        .declare(PACK, "first", FieldMetadata::reference(TAG))
        .declare(PACK, "second", FieldMetadata::reference(TAG))
        .object(TAG, json_schema!({}))
        .declare(TAG, "label", FieldMetadata::string("Label"));

    let schema = builder.build().schema_for(PACK).unwrap();

    assert_eq!(schema.get("properties").unwrap().as_object().unwrap().len(), 2);
}

#[test]
fn taplo_extension_roundtrip() {
    let extension = TaploExtension::enum_docs([Some("doc-a"), None, Some("doc-c")]);
    let value = extension.to_value();

    assert_eq!(
        value,
        json!({ "docs": { "enumValues": ["doc-a", null, "doc-c"] } })
    );

    let mut node = serde_json::Map::new();
    node.insert("x-taplo".into(), value);
    let parsed = TaploExtension::from_node(&node).unwrap();

    let docs = parsed.enum_value_docs().unwrap();

    assert_eq!(docs.len(), 3);
    assert_eq!(docs[1], None);
    assert_eq!(docs[2].as_deref(), Some("doc-c"));
    assert!(!parsed.is_hidden());
    assert_eq!(parsed.default_value(), None);
}

#[test]
fn malformed_taplo_entry_keeps_the_rest() {
    let mut node = serde_json::Map::new();
    node.insert(
        "x-taplo".into(),
        json!({ "hidden": "yes", "docs": { "enumValues": ["doc-a", null] } }),
    );

    let parsed = TaploExtension::from_node(&node).unwrap();

    assert_eq!(parsed.hidden, None);
    assert!(!parsed.is_hidden());
    assert_eq!(parsed.enum_value_docs().map(<[_]>::len), Some(2));
}

#[test]
fn array_field_without_element_instance_is_still_an_array() {
    let mut table = FieldTable::new();
    table.declare("entries", FieldMetadata::array_of(ENTRY, "Entries"));

    let schema = synthesize(PACK, &serde_json::Map::new(), &table, &[]).unwrap();
    let entries = &schema.get("properties").unwrap()["entries"];

    assert_eq!(entries["type"], "array");
    assert_eq!(entries["uniqueItems"], true);
    assert!(entries.get("items").is_none());
}

#[test]
fn reference_without_instance_is_missing_type() {
    let mut table = FieldTable::new();
    table.declare("tag", FieldMetadata::reference(TAG));

    let result = synthesize(PACK, &serde_json::Map::new(), &table, &[]);

    assert!(matches!(result, Err(SpecError::MissingType { field, .. }) if field == "tag"));
}
