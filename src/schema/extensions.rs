//! Vendor extension blocks carried on schema nodes.
//!
//! Generic validators ignore these keys; editors (taplo) and the Markdown
//! renderer read them for extra documentation hints. A malformed entry is
//! dropped on its own, with a warning, and the rest of the block is kept.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::warn;

/// Key of the taplo editor extension block.
pub const TAPLO_KEY: &str = "x-taplo";

/// Key of the generator's own extension block.
pub const SPEC_GEN_KEY: &str = "x-packwiz-spec-gen";

/// The `x-taplo` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaploExtension {
    /// Hides the entry from completion and generated docs.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Documentation overrides.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub docs: Option<TaploDocs>,
    /// Links for the key and enum values.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub links: Option<TaploLinks>,
    /// Keys inserted when the table is created in an editor.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub init_keys: Option<Vec<String>>,
}

/// `x-taplo.docs`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaploDocs {
    /// Main documentation text.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    /// Per-value docs, positionally aligned with `enum`; `null` skips a value.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Option<String>>>,
    /// Pre-formatted default value shown instead of `default`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// `x-taplo.links`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaploLinks {
    /// Link for the key itself.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Links for each enum value.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

/// The `x-packwiz-spec-gen` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecGenExtension {
    /// Text shown above a multi-line example.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub example_doc: Option<String>,
}

impl TaploExtension {
    /// Extension carrying only per-enum-value docs.
    pub fn enum_docs<I>(docs: I) -> Self
    where
        I: IntoIterator<Item = Option<&'static str>>,
    {
        Self {
            docs: Some(TaploDocs {
                enum_values: Some(
                    docs.into_iter()
                        .map(|doc| doc.map(str::to_owned))
                        .collect(),
                ),
                ..TaploDocs::default()
            }),
            ..Self::default()
        }
    }

    /// Reads the block from a schema node. A missing or malformed block is
    /// treated as absent.
    pub fn from_node(node: &Map<String, Value>) -> Option<Self> {
        read_block(node, TAPLO_KEY)
    }

    /// Whether the node asks to be left out of generated docs.
    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    /// Per-value enum docs, if any.
    pub fn enum_value_docs(&self) -> Option<&[Option<String>]> {
        self.docs.as_ref()?.enum_values.as_deref()
    }

    /// Default value override text, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.docs.as_ref()?.default_value.as_deref()
    }

    /// The block as a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl SpecGenExtension {
    /// Extension carrying an example explanation.
    pub fn example_doc(text: &str) -> Self {
        Self {
            example_doc: Some(text.to_string()),
        }
    }

    /// Reads the block from a schema node.
    pub fn from_node(node: &Map<String, Value>) -> Option<Self> {
        read_block(node, SPEC_GEN_KEY)
    }

    /// The block as a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

fn read_block<T: DeserializeOwned>(node: &Map<String, Value>, key: &str) -> Option<T> {
    let block = node.get(key)?;
    match serde_json::from_value(block.clone()) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!(key, error = %e, "ignoring malformed extension block");
            None
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            warn!(error = %e, "ignoring malformed extension entry");
            Ok(None)
        }
    }
}
