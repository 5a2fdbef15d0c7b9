use std::{collections::HashMap, fmt};

use schemars::Schema;
use serde_json::{Map, Value};
use tracing::debug;

use super::{FieldMetadata, MetadataRegistry, synthesize::synthesize};
use crate::{Result, SpecError};

/// Identifier of a declared model type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(&'static str);

impl ModelId {
    /// Creates a model id from its name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The model name.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// How a model type produces its schema.
#[derive(Debug, Clone)]
pub enum ModelShape {
    /// Object model: the schema is synthesized from the field table on top
    /// of these object-level attributes.
    Object {
        /// Object-level attributes (`description`, `$id`, extensions, ...).
        base: Map<String, Value>,
    },
    /// Leaf model with a hand-written schema used as is.
    Fixed(Schema),
}

/// Collects model definitions and field declarations.
///
/// This is the only place metadata can be declared; [`CatalogBuilder::build`]
/// freezes everything into a read-only [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    models: HashMap<ModelId, ModelShape>,
    registry: MetadataRegistry,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines an object model with the given object-level attributes.
    pub fn object(&mut self, id: ModelId, base: Schema) -> &mut Self {
        let base = base.as_object().cloned().unwrap_or_default();
        self.models.insert(id, ModelShape::Object { base });
        self
    }

    /// Defines a leaf model with a fixed schema.
    pub fn fixed(&mut self, id: ModelId, schema: Schema) -> &mut Self {
        self.models.insert(id, ModelShape::Fixed(schema));
        self
    }

    /// Defines `id` as an object model carrying every field of `base`.
    /// Further [`declare`](Self::declare) calls on `id` override the
    /// inherited entries without touching `base`.
    pub fn object_extending(&mut self, id: ModelId, base: ModelId, attrs: Schema) -> &mut Self {
        self.object(id, attrs);
        self.registry.extend(base, id);
        self
    }

    /// Declares (or amends) metadata for one field of `model`.
    pub fn declare(&mut self, model: ModelId, field: &str, metadata: FieldMetadata) -> &mut Self {
        self.registry.declare(model, field, metadata);
        self
    }

    /// Freezes the declarations.
    pub fn build(self) -> Catalog {
        Catalog {
            models: self.models,
            registry: self.registry,
        }
    }
}

/// Read-only set of model types and their field metadata.
#[derive(Debug)]
pub struct Catalog {
    models: HashMap<ModelId, ModelShape>,
    registry: MetadataRegistry,
}

impl Catalog {
    /// Field metadata for all models.
    pub fn registry(&self) -> &MetadataRegistry {
        &self.registry
    }

    /// The definition of `id`, if any.
    pub fn model(&self, id: ModelId) -> Option<&ModelShape> {
        self.models.get(&id)
    }

    /// Ids of all defined models, sorted by name.
    pub fn model_ids(&self) -> Vec<ModelId> {
        let mut ids: Vec<ModelId> = self.models.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Instantiates `id`, building nested instances for every referenced
    /// model and synthesizing a fresh schema document.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::MissingType` for a field without kind,
    /// `SpecError::UnknownModel` for a reference to an undefined model and
    /// `SpecError::RecursiveModel` when a model reaches itself.
    pub fn instantiate(&self, id: ModelId) -> Result<ModelInstance> {
        let mut chain = ReferenceChain::new();
        self.instantiate_tracked(id, None, &mut chain)
    }

    /// Convenience for `instantiate(id)?.into_schema()`.
    ///
    /// # Errors
    ///
    /// See [`Catalog::instantiate`].
    pub fn schema_for(&self, id: ModelId) -> Result<Schema> {
        Ok(self.instantiate(id)?.into_schema())
    }

    fn instantiate_tracked(
        &self,
        id: ModelId,
        referenced_by: Option<&str>,
        chain: &mut ReferenceChain,
    ) -> Result<ModelInstance> {
        let shape = self.models.get(&id).ok_or_else(|| SpecError::UnknownModel {
            model: id.to_string(),
            referenced_by: referenced_by.unwrap_or("<root>").to_string(),
        })?;

        chain.detect_cycle(id)?;
        chain.push(id);
        let result = self.build_instance(id, shape, chain);
        chain.pop();
        result
    }

    fn build_instance(
        &self,
        id: ModelId,
        shape: &ModelShape,
        chain: &mut ReferenceChain,
    ) -> Result<ModelInstance> {
        let base = match shape {
            ModelShape::Fixed(schema) => {
                return Ok(ModelInstance {
                    model: id,
                    fields: Vec::new(),
                    schema: schema.clone(),
                });
            }
            ModelShape::Object { base } => base,
        };

        let table = self.registry.lookup(id);
        let fields = table
            .iter()
            .map(|(name, metadata)| -> Result<FieldValue> {
                let nested = match metadata.referenced_model() {
                    Some(target) => {
                        let origin = format!("{id}.{name}");
                        Some(self.instantiate_tracked(target, Some(&origin), chain)?)
                    }
                    None => None,
                };
                Ok(FieldValue {
                    name: name.to_string(),
                    nested,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let schema = synthesize(id, base, table, &fields)?;
        debug!(model = %id, fields = fields.len(), "synthesized model schema");

        Ok(ModelInstance {
            model: id,
            fields,
            schema,
        })
    }
}

/// A value of a declared model type.
///
/// Owns its nested instances and the schema document synthesized for it
/// when it was created.
#[derive(Debug, Clone)]
pub struct ModelInstance {
    model: ModelId,
    fields: Vec<FieldValue>,
    schema: Schema,
}

impl ModelInstance {
    /// The model type of this instance.
    pub fn model(&self) -> ModelId {
        self.model
    }

    /// Field values in declaration order. Leaf models have none.
    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    /// The value of `name`, if the model declares it.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The synthesized schema document.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Consumes the instance, keeping only its schema document.
    pub fn into_schema(self) -> Schema {
        self.schema
    }
}

/// One field of a [`ModelInstance`].
#[derive(Debug, Clone)]
pub struct FieldValue {
    name: String,
    nested: Option<ModelInstance>,
}

impl FieldValue {
    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nested instance for object references; for arrays, the
    /// representative element instance. `None` for primitives.
    pub fn nested(&self) -> Option<&ModelInstance> {
        self.nested.as_ref()
    }
}

/// Tracks the chain of models being instantiated
struct ReferenceChain {
    chain: Vec<ModelId>,
}

impl ReferenceChain {
    fn new() -> Self {
        Self { chain: Vec::new() }
    }

    fn detect_cycle(&self, id: ModelId) -> Result<()> {
        if self.chain.contains(&id) {
            let mut names: Vec<&str> = self.chain.iter().map(ModelId::as_str).collect();
            names.push(id.as_str());
            return Err(SpecError::RecursiveModel {
                chain: names.join(" -> "),
            });
        }
        Ok(())
    }

    fn push(&mut self, id: ModelId) {
        self.chain.push(id);
    }

    fn pop(&mut self) {
        self.chain.pop();
    }
}
