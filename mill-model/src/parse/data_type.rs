//! Recursive construction of [`DataType`] trees from schema type nodes.

use eventmill_core::Diagnostic;
use indexmap::IndexMap;
use serde_json::Value;

use super::json::{JsonObject, parse_uuid, scalar_text};
use crate::{
    DataKind, DataType, Result, Shape,
    naming::{NameRole, synthesize_name},
};

/// Normalize a declared shape tag: drop the leading `:`, lower-case it and
/// map `-` to `_` (e.g. `:map-of` -> `map_of`).
pub(crate) fn normalize_tag(tag: &str) -> String {
    tag.strip_prefix(':')
        .unwrap_or(tag)
        .to_lowercase()
        .replace('-', "_")
}

/// Builds type trees, recording shape problems as warnings.
pub(crate) struct TypeTreeParser<'d> {
    diagnostics: &'d mut Vec<Diagnostic>,
}

impl<'d> TypeTreeParser<'d> {
    pub fn new(diagnostics: &'d mut Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    fn warn(&mut self, message: String, location: &str) {
        self.diagnostics
            .push(Diagnostic::warning("parse", message).at(location).logged());
    }

    /// Build the node at `location`. `inherited` is the name handed down by
    /// the parent (the schema name for a root node).
    pub fn build(
        &mut self,
        node: &Value,
        inherited: &str,
        nested: bool,
        location: &str,
    ) -> Result<DataType> {
        let obj = JsonObject::new(node, location)?;
        let tag = obj.str("type")?;
        let properties = self.properties(&obj)?;

        let Some(shape) = Shape::from_tag(&normalize_tag(tag)) else {
            self.warn(format!("unknown shape '{}', left unset", tag), location);
            return Ok(with_properties(
                DataType::new(inherited, DataKind::Unset),
                properties,
            ));
        };

        let name = match shape {
            Shape::Map if nested => synthesize_name(inherited, NameRole::Object),
            Shape::Enum if nested => synthesize_name(inherited, NameRole::Enum),
            _ => inherited.to_string(),
        };

        let children = obj.opt_array("children")?;
        let kind = self.kind(shape, &name, children, location)?;
        Ok(with_properties(DataType::new(name, kind), properties))
    }

    fn properties(&mut self, obj: &JsonObject<'_>) -> Result<Option<IndexMap<String, String>>> {
        let Some(items) = obj.opt_array("properties")? else {
            return Ok(None);
        };
        let location = format!("{}.properties", obj.location());
        let mut properties = IndexMap::new();
        for item in items {
            let entry = JsonObject::new(item, &location)?;
            let key = entry.str("key")?;
            let value = match entry_value(&entry) {
                Some(value) => value,
                None => {
                    self.warn(format!("property '{}' has no scalar value", key), &location);
                    continue;
                }
            };
            properties.insert(key.to_string(), value);
        }
        Ok(Some(properties))
    }

    fn kind(
        &mut self,
        shape: Shape,
        name: &str,
        children: Option<&Vec<Value>>,
        location: &str,
    ) -> Result<DataKind> {
        let children = children.map(Vec::as_slice).unwrap_or_default();

        let kind = match shape {
            Shape::Vector | Shape::Sequential | Shape::Set | Shape::Not | Shape::Maybe => {
                let Some(child) = children.first() else {
                    return Ok(self.childless(shape, location));
                };
                let inner = Box::new(self.build(child, name, true, &format!("{location}.0"))?);
                match shape {
                    Shape::Vector => DataKind::Vector(inner),
                    Shape::Sequential => DataKind::Sequential(inner),
                    Shape::Set => DataKind::Set(inner),
                    Shape::Not => DataKind::Not(inner),
                    _ => DataKind::Maybe(inner),
                }
            }
            Shape::MapOf => {
                let [key, value, ..] = children else {
                    return Ok(self.childless(shape, location));
                };
                let key_name = synthesize_name(name, NameRole::Key);
                let value_name = synthesize_name(name, NameRole::Value);
                DataKind::MapOf {
                    key: Box::new(self.build(key, &key_name, true, &format!("{location}.key"))?),
                    value: Box::new(self.build(
                        value,
                        &value_name,
                        true,
                        &format!("{location}.value"),
                    )?),
                }
            }
            Shape::Tuple | Shape::Or | Shape::And => {
                let members = children
                    .iter()
                    .enumerate()
                    .map(|(i, child)| self.build(child, name, true, &format!("{location}.{i}")))
                    .collect::<Result<Vec<_>>>()?;
                match shape {
                    Shape::Tuple => DataKind::Tuple(members),
                    Shape::Or => DataKind::Or(members),
                    _ => DataKind::And(members),
                }
            }
            Shape::Map => {
                let mut entries = IndexMap::new();
                for child in children {
                    let entry = JsonObject::new(child, location)?;
                    let key = entry.str("entry")?;
                    let Some(schema) = entry.value("schema") else {
                        return Err(crate::Error::missing_field("schema", location));
                    };
                    let dt = self.build(schema, name, true, &format!("{location}.{key}"))?;
                    if entries.insert(key.to_string(), dt).is_some() {
                        self.warn(format!("duplicate entry '{}', last one wins", key), location);
                    }
                }
                DataKind::Map(entries)
            }
            Shape::Enum => {
                let mut symbols = Vec::with_capacity(children.len());
                for child in children {
                    let symbol = JsonObject::new(child, location)?.str("symbol")?;
                    symbols.push(symbol.to_string());
                }
                DataKind::Enum(symbols)
            }
            Shape::Re => {
                let Some(child) = children.first() else {
                    return Ok(self.childless(shape, location));
                };
                let expression = JsonObject::new(child, location)?.str("expression")?;
                DataKind::Re(expression.to_string())
            }
            Shape::Ref => {
                let Some(child) = children.first() else {
                    return Ok(self.childless(shape, location));
                };
                let reference = JsonObject::new(child, location)?.str("reference")?;
                DataKind::Ref(parse_uuid(reference, location)?)
            }
            scalar => {
                if !children.is_empty() {
                    self.warn(
                        format!("shape '{}' does not take children, ignored", scalar),
                        location,
                    );
                }
                scalar_kind(scalar)
            }
        };
        Ok(kind)
    }

    /// A shape whose required children are missing is left unset.
    fn childless(&mut self, shape: Shape, location: &str) -> DataKind {
        self.warn(
            format!("shape '{}' is missing its children, left unset", shape),
            location,
        );
        DataKind::Unset
    }
}

fn entry_value(entry: &JsonObject<'_>) -> Option<String> {
    entry.value("value").and_then(scalar_text)
}

fn with_properties(dt: DataType, properties: Option<IndexMap<String, String>>) -> DataType {
    match properties {
        Some(properties) => dt.with_properties(properties),
        None => dt,
    }
}

fn scalar_kind(shape: Shape) -> DataKind {
    match shape {
        Shape::String => DataKind::String,
        Shape::Int => DataKind::Int,
        Shape::Double => DataKind::Double,
        Shape::Boolean => DataKind::Boolean,
        Shape::Symbol => DataKind::Symbol,
        Shape::QualifiedSymbol => DataKind::QualifiedSymbol,
        Shape::Keyword => DataKind::Keyword,
        Shape::QualifiedKeyword => DataKind::QualifiedKeyword,
        Shape::Uuid => DataKind::Uuid,
        Shape::Nil => DataKind::Nil,
        _ => DataKind::Any,
    }
}
