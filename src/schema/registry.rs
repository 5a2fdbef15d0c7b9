use std::collections::HashMap;

use super::{FieldMetadata, ModelId};

static EMPTY_TABLE: FieldTable = FieldTable { fields: Vec::new() };

/// Ordered mapping from field name to merged metadata.
///
/// Order is the order in which each field was first declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldTable {
    fields: Vec<(String, FieldMetadata)>,
}

impl FieldTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `metadata` into the entry for `field`, appending a new entry
    /// if the field has not been seen yet.
    pub fn declare(&mut self, field: &str, metadata: FieldMetadata) {
        match self.fields.iter_mut().find(|(name, _)| name == field) {
            Some((_, existing)) => existing.merge(metadata),
            None => self.fields.push((field.to_string(), metadata)),
        }
    }

    /// Metadata for `field`, if declared.
    pub fn get(&self, field: &str) -> Option<&FieldMetadata> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, metadata)| metadata)
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldMetadata)> {
        self.fields
            .iter()
            .map(|(name, metadata)| (name.as_str(), metadata))
    }

    /// Field names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(name, _)| name).collect()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has been declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of fields marked required, in declaration order.
    pub fn required_fields(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, metadata)| metadata.is_required())
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// A copy of this table with `overrides` merged on top. Fields only in
    /// `overrides` are appended after the inherited ones.
    pub fn extended_with(&self, overrides: &FieldTable) -> FieldTable {
        let mut table = self.clone();
        for (name, metadata) in overrides.iter() {
            table.declare(name, metadata.clone());
        }
        table
    }
}

/// Field metadata for every declared model type.
///
/// Filled once while the catalog is being built and read-only afterwards.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    tables: HashMap<ModelId, FieldTable>,
}

impl MetadataRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `metadata` into whatever was declared for `(model, field)`.
    ///
    /// Later declarations override only the keys they set. Two declarations
    /// with different kinds resolve to the last one.
    pub fn declare(&mut self, model: ModelId, field: &str, metadata: FieldMetadata) {
        self.tables
            .entry(model)
            .or_default()
            .declare(field, metadata);
    }

    /// All fields declared on `model`, inherited ones included. A model
    /// without declarations yields an empty table.
    pub fn lookup(&self, model: ModelId) -> &FieldTable {
        self.tables.get(&model).unwrap_or(&EMPTY_TABLE)
    }

    /// Gives `derived` every field of `base`, with whatever `derived` has
    /// already declared merged on top. Declarations made on `derived`
    /// afterwards keep overriding the inherited entries.
    pub fn extend(&mut self, base: ModelId, derived: ModelId) {
        let inherited = self.lookup(base).clone();
        let own = self.tables.remove(&derived).unwrap_or_default();
        self.tables.insert(derived, inherited.extended_with(&own));
    }

    /// Whether anything was declared for `model`.
    pub fn contains(&self, model: ModelId) -> bool {
        self.tables.contains_key(&model)
    }
}
