//! Document model metadata and schema synthesis.
//!
//! Model types are declared once through a [`CatalogBuilder`]: object
//! models get a field table built from [`FieldMetadata`] declarations, leaf
//! models carry a fixed schema. Instantiating a model from the frozen
//! [`Catalog`] walks its references and synthesizes a fresh schema document
//! every time.

pub mod extensions;
mod metadata;
mod model;
mod registry;
mod synthesize;

#[cfg(test)]
mod tests;

pub use extensions::{SpecGenExtension, TaploDocs, TaploExtension, TaploLinks};
pub use metadata::{FieldContent, FieldKind, FieldMetadata};
pub use model::{Catalog, CatalogBuilder, FieldValue, ModelId, ModelInstance, ModelShape};
pub use registry::{FieldTable, MetadataRegistry};
pub use synthesize::synthesize;
