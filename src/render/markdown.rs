use schemars::Schema;
use serde_json::{Map, Value};

use super::RenderOptions;
use crate::{
    Result, SpecError,
    schema::{SpecGenExtension, TaploExtension},
};

const ADDITIONAL_PROPERTIES_TITLE: &str = "Additional properties";
const ARRAY_ITEM_TITLE: &str = "*Array item*";
const ROOT_NAME: &str = "<root>";

/// Renders schema documents into nested, collapsible Markdown blocks.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

/// Renders `schema` with default options.
///
/// # Errors
///
/// Returns `SpecError::AmbiguousType` if any nested node has a list of
/// types or no type at all.
pub fn render_markdown(schema: &Schema) -> Result<String> {
    MarkdownRenderer::default().render(schema)
}

impl MarkdownRenderer {
    /// Creates a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders a whole schema document.
    ///
    /// # Errors
    ///
    /// Returns `SpecError::AmbiguousType` if any nested node has a list of
    /// types or no type at all; nothing is returned in that case.
    pub fn render(&self, schema: &Schema) -> Result<String> {
        self.render_value(schema.as_value())
    }

    /// Renders a schema given as a plain JSON value. Boolean schemas have
    /// nothing to document and render empty. The root may omit `type`, but
    /// a list of types is rejected like anywhere else.
    ///
    /// # Errors
    ///
    /// See [`MarkdownRenderer::render`].
    pub fn render_value(&self, schema: &Value) -> Result<String> {
        match schema {
            Value::Object(node) => {
                if node.get("type").is_some_and(Value::is_array) {
                    return Err(SpecError::AmbiguousType {
                        name: node
                            .get("title")
                            .and_then(Value::as_str)
                            .unwrap_or(ROOT_NAME)
                            .to_string(),
                    });
                }
                self.render_node(node, 0)
            }
            _ => Ok(String::new()),
        }
    }

    fn render_node(&self, node: &Map<String, Value>, depth: usize) -> Result<String> {
        let mut doc = Paragraphs::default();
        let taplo = TaploExtension::from_node(node);

        // Not rendered: format, title, $defs/$ref, pattern, conditionals.
        if let Some(value) = present(node, "const") {
            doc.push(format!("**Must equal** {}", literal(value)));
        }
        let enum_values = present(node, "enum").and_then(Value::as_array);
        if let Some(values) = enum_values {
            doc.push(format!("**One of:** {}", literal_list(values)));
        }
        match (taplo.as_ref().and_then(TaploExtension::default_value), present(node, "default")) {
            (Some(text), _) => doc.push(format!("**Default:** `{text}`")),
            (None, Some(value)) => doc.push(format!("**Default:** {}", literal(value))),
            (None, None) => {}
        }
        if let Some(description) = node.get("description").and_then(Value::as_str) {
            doc.push(description);
        }
        if let (Some(values), Some(docs)) = (
            enum_values,
            taplo.as_ref().and_then(TaploExtension::enum_value_docs),
        ) {
            let definitions = enum_definitions(values, docs);
            if !definitions.is_empty() {
                doc.push(definitions);
            }
        }
        self.render_examples(node, &mut doc);
        if node.get("uniqueItems").and_then(Value::as_bool) == Some(true) {
            doc.push("***Values must be unique***");
        }

        self.render_properties(node, depth, &mut doc)?;
        self.render_additional_properties(node, depth, &mut doc)?;
        self.render_items(node, depth, &mut doc)?;

        Ok(doc.finish())
    }

    fn render_examples(&self, node: &Map<String, Value>, doc: &mut Paragraphs) {
        let Some(examples) = node.get("examples").and_then(Value::as_array) else {
            return;
        };
        let Some(first) = examples.first() else {
            return;
        };

        match first.as_str() {
            Some(text) if text.contains('\n') => {
                doc.push(r#"??? example "Example""#);
                if let Some(explanation) =
                    SpecGenExtension::from_node(node).and_then(|ext| ext.example_doc)
                {
                    doc.push(format!("\t{}", indent(&explanation)));
                }
                let body = text.strip_suffix('\n').unwrap_or(text);
                doc.push(format!("\t```toml\n\t{}\n\t```", indent(body)));
            }
            _ => {
                let label = if examples.len() > 1 { "Examples" } else { "Example" };
                doc.push(format!("**{label}:** {}", literal_list(examples)));
            }
        }
    }

    fn render_properties(
        &self,
        node: &Map<String, Value>,
        depth: usize,
        doc: &mut Paragraphs,
    ) -> Result<()> {
        let Some(properties) = node.get("properties").and_then(Value::as_object) else {
            return Ok(());
        };
        let required: Vec<&str> = node
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        for (name, property) in properties {
            let Value::Object(child) = property else {
                continue;
            };
            if TaploExtension::from_node(child).is_some_and(|ext| ext.is_hidden()) {
                continue;
            }

            let type_name = single_type(child, name)?;
            let auto_expand = depth == 0 && matches!(type_name, "object" | "array");
            let title = self.details_title(
                type_name,
                name,
                required.contains(&name.as_str()),
                auto_expand,
            );
            doc.push(self.nested_block(title, child, depth)?);
        }

        Ok(())
    }

    fn render_additional_properties(
        &self,
        node: &Map<String, Value>,
        depth: usize,
        doc: &mut Paragraphs,
    ) -> Result<()> {
        let Some(Value::Object(extra)) = node.get("additionalProperties") else {
            return Ok(());
        };

        let name = extra
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(ADDITIONAL_PROPERTIES_TITLE);
        let type_name = single_type(extra, name)?;
        let title = self.details_title(type_name, name, false, false);
        doc.push(self.nested_block(title, extra, depth)?);

        Ok(())
    }

    fn render_items(
        &self,
        node: &Map<String, Value>,
        depth: usize,
        doc: &mut Paragraphs,
    ) -> Result<()> {
        let items: Vec<&Map<String, Value>> = match node.get("items") {
            Some(Value::Object(item)) => vec![item],
            Some(Value::Array(list)) => list.iter().filter_map(Value::as_object).collect(),
            _ => return Ok(()),
        };

        for item in items {
            let type_name = single_type(item, ARRAY_ITEM_TITLE)?;
            let title = self.details_title(type_name, ARRAY_ITEM_TITLE, false, depth <= 1);
            doc.push(self.nested_block(title, item, depth)?);
        }

        Ok(())
    }

    fn nested_block(
        &self,
        title: String,
        child: &Map<String, Value>,
        depth: usize,
    ) -> Result<String> {
        let body = self.render_node(child, depth + 1)?;
        Ok(format!("{title}\n\n\t{}", indent(&body)))
    }

    fn details_title(&self, type_name: &str, name: &str, required: bool, auto_expand: bool) -> String {
        let marker = if auto_expand { "+" } else { "" };

        if self.options.enhanced_titles {
            let tag = if required {
                r#"<div class="json-gen-tag">Required</div>"#
            } else {
                ""
            };
            format!(
                r#"???{marker} json-{type_name} "<div class="json-gen-enhanced-details"><div>{name}</div><div style="flex:1"></div>{tag}<div class="json-gen-type">{type_name}</div></div>""#
            )
        } else {
            let suffix = if required { " (required)" } else { "" };
            format!(r#"???{marker} json-{type_name} "{name}{suffix}""#)
        }
    }
}

/// Paragraph accumulator; paragraphs are separated by one blank line.
#[derive(Default)]
struct Paragraphs {
    parts: Vec<String>,
}

impl Paragraphs {
    fn push(&mut self, contents: impl Into<String>) {
        self.parts.push(contents.into());
    }

    fn finish(self) -> String {
        self.parts.join("\n\n")
    }
}

/// The node's type, which must be exactly one type name.
fn single_type<'a>(node: &'a Map<String, Value>, name: &str) -> Result<&'a str> {
    node.get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| SpecError::AmbiguousType {
            name: name.to_string(),
        })
}

fn present<'a>(node: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    node.get(key).filter(|value| !value.is_null())
}

/// Inline code literal; strings keep their JSON quotes.
fn literal(value: &Value) -> String {
    format!("`{value}`")
}

fn literal_list(values: &[Value]) -> String {
    values.iter().map(literal).collect::<Vec<_>>().join(", ")
}

fn enum_definitions(values: &[Value], docs: &[Option<String>]) -> String {
    values
        .iter()
        .zip(docs)
        .filter_map(|(value, doc)| {
            let doc = doc.as_deref()?;
            let term = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            Some(format!("`{term}`\n\n: {}", indent(doc)))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn indent(text: &str) -> String {
    text.replace('\n', "\n\t")
}
