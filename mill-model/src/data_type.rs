//! The recursive type tree attached to every schema.

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;
use uuid::Uuid;

/// The fixed vocabulary of shape tags understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    String,
    Int,
    Double,
    Boolean,
    Symbol,
    QualifiedSymbol,
    Keyword,
    QualifiedKeyword,
    Uuid,
    Nil,
    Any,
    Vector,
    Sequential,
    Set,
    MapOf,
    Tuple,
    Or,
    And,
    Map,
    Enum,
    Re,
    Ref,
    Not,
    Maybe,
    /// Not a declared tag: stands for a node left unset after a shape error.
    Unknown,
}

impl Shape {
    /// Parse a normalized tag (lower-case, `-` already mapped to `_`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let shape = match tag {
            "string" => Shape::String,
            "int" => Shape::Int,
            "double" => Shape::Double,
            "boolean" => Shape::Boolean,
            "symbol" => Shape::Symbol,
            "qualified_symbol" => Shape::QualifiedSymbol,
            "keyword" => Shape::Keyword,
            "qualified_keyword" => Shape::QualifiedKeyword,
            "uuid" => Shape::Uuid,
            "nil" => Shape::Nil,
            "any" => Shape::Any,
            "vector" => Shape::Vector,
            "sequential" => Shape::Sequential,
            "set" => Shape::Set,
            "map_of" => Shape::MapOf,
            "tuple" => Shape::Tuple,
            "or" => Shape::Or,
            "and" => Shape::And,
            "map" => Shape::Map,
            "enum" => Shape::Enum,
            "re" => Shape::Re,
            "ref" => Shape::Ref,
            "not" => Shape::Not,
            "maybe" => Shape::Maybe,
            _ => return None,
        };
        Some(shape)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::Int => "int",
            Shape::Double => "double",
            Shape::Boolean => "boolean",
            Shape::Symbol => "symbol",
            Shape::QualifiedSymbol => "qualified-symbol",
            Shape::Keyword => "keyword",
            Shape::QualifiedKeyword => "qualified-keyword",
            Shape::Uuid => "uuid",
            Shape::Nil => "nil",
            Shape::Any => "any",
            Shape::Vector => "vector",
            Shape::Sequential => "sequential",
            Shape::Set => "set",
            Shape::MapOf => "map-of",
            Shape::Tuple => "tuple",
            Shape::Or => "or",
            Shape::And => "and",
            Shape::Map => "map",
            Shape::Enum => "enum",
            Shape::Re => "re",
            Shape::Ref => "ref",
            Shape::Not => "not",
            Shape::Maybe => "maybe",
            Shape::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of a schema's type tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DataType {
    /// Generated name, used to title nested classes and enums.
    pub name: String,
    /// Optional property bag (min, max, default, ...).
    pub properties: Option<IndexMap<String, String>>,
    pub kind: DataKind,
}

/// Shape-specific payload of a [`DataType`].
#[derive(Debug, Clone, PartialEq)]
pub enum DataKind {
    String,
    Int,
    Double,
    Boolean,
    Symbol,
    QualifiedSymbol,
    Keyword,
    QualifiedKeyword,
    Uuid,
    Nil,
    Any,
    Vector(Box<DataType>),
    Sequential(Box<DataType>),
    Set(Box<DataType>),
    MapOf {
        key: Box<DataType>,
        value: Box<DataType>,
    },
    Tuple(Vec<DataType>),
    Or(Vec<DataType>),
    And(Vec<DataType>),
    /// Object: entry name to type, in declaration order.
    Map(IndexMap<String, DataType>),
    /// Ordered list of symbols.
    Enum(Vec<String>),
    /// Regular expression pattern.
    Re(String),
    /// Identifier of another schema.
    Ref(Uuid),
    Not(Box<DataType>),
    Maybe(Box<DataType>),
    /// Unknown tag or missing children; has no type of its own.
    Unset,
}

impl DataKind {
    pub fn shape(&self) -> Shape {
        match self {
            DataKind::String => Shape::String,
            DataKind::Int => Shape::Int,
            DataKind::Double => Shape::Double,
            DataKind::Boolean => Shape::Boolean,
            DataKind::Symbol => Shape::Symbol,
            DataKind::QualifiedSymbol => Shape::QualifiedSymbol,
            DataKind::Keyword => Shape::Keyword,
            DataKind::QualifiedKeyword => Shape::QualifiedKeyword,
            DataKind::Uuid => Shape::Uuid,
            DataKind::Nil => Shape::Nil,
            DataKind::Any => Shape::Any,
            DataKind::Vector(_) => Shape::Vector,
            DataKind::Sequential(_) => Shape::Sequential,
            DataKind::Set(_) => Shape::Set,
            DataKind::MapOf { .. } => Shape::MapOf,
            DataKind::Tuple(_) => Shape::Tuple,
            DataKind::Or(_) => Shape::Or,
            DataKind::And(_) => Shape::And,
            DataKind::Map(_) => Shape::Map,
            DataKind::Enum(_) => Shape::Enum,
            DataKind::Re(_) => Shape::Re,
            DataKind::Ref(_) => Shape::Ref,
            DataKind::Not(_) => Shape::Not,
            DataKind::Maybe(_) => Shape::Maybe,
            DataKind::Unset => Shape::Unknown,
        }
    }
}

/// Returned when a payload accessor is used on a node of another shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{name}' is a {actual}, not a {expected}")]
pub struct ShapeMismatch {
    pub name: String,
    pub expected: &'static str,
    pub actual: Shape,
}

impl DataType {
    pub fn new(name: impl Into<String>, kind: DataKind) -> Self {
        Self {
            name: name.into(),
            properties: None,
            kind,
        }
    }

    pub fn with_properties(mut self, properties: IndexMap<String, String>) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn shape(&self) -> Shape {
        self.kind.shape()
    }

    /// The name with whitespace removed.
    pub fn formatted_name(&self) -> String {
        eventmill_core::format_name(&self.name)
    }

    /// Properties, if any were declared and the bag is non-empty.
    pub fn properties(&self) -> Option<&IndexMap<String, String>> {
        self.properties.as_ref().filter(|p| !p.is_empty())
    }

    fn mismatch(&self, expected: &'static str) -> ShapeMismatch {
        ShapeMismatch {
            name: self.name.clone(),
            expected,
            actual: self.shape(),
        }
    }

    /// Entries of a `map` node.
    pub fn entries(&self) -> Result<&IndexMap<String, DataType>, ShapeMismatch> {
        match &self.kind {
            DataKind::Map(entries) => Ok(entries),
            _ => Err(self.mismatch("map")),
        }
    }

    /// Symbols of an `enum` node.
    pub fn symbols(&self) -> Result<&[String], ShapeMismatch> {
        match &self.kind {
            DataKind::Enum(symbols) => Ok(symbols),
            _ => Err(self.mismatch("enum")),
        }
    }

    /// Target schema of a `ref` node.
    pub fn reference(&self) -> Result<Uuid, ShapeMismatch> {
        match &self.kind {
            DataKind::Ref(id) => Ok(*id),
            _ => Err(self.mismatch("ref")),
        }
    }

    /// Pattern of a `re` node.
    pub fn pattern(&self) -> Result<&str, ShapeMismatch> {
        match &self.kind {
            DataKind::Re(pattern) => Ok(pattern),
            _ => Err(self.mismatch("re")),
        }
    }

    /// Element of a single-child node (vector, sequential, set, not, maybe).
    pub fn element(&self) -> Result<&DataType, ShapeMismatch> {
        match &self.kind {
            DataKind::Vector(inner)
            | DataKind::Sequential(inner)
            | DataKind::Set(inner)
            | DataKind::Not(inner)
            | DataKind::Maybe(inner) => Ok(inner),
            _ => Err(self.mismatch("single-child shape")),
        }
    }

    /// Key and value of a `map-of` node.
    pub fn key_value(&self) -> Result<(&DataType, &DataType), ShapeMismatch> {
        match &self.kind {
            DataKind::MapOf { key, value } => Ok((key, value)),
            _ => Err(self.mismatch("map-of")),
        }
    }

    /// Members of a combinator (tuple, or, and).
    pub fn members(&self) -> Result<&[DataType], ShapeMismatch> {
        match &self.kind {
            DataKind::Tuple(members) | DataKind::Or(members) | DataKind::And(members) => {
                Ok(members)
            }
            _ => Err(self.mismatch("combinator")),
        }
    }

    /// Schema ids of every `ref` node in this tree, in depth-first order.
    pub fn references(&self) -> Vec<Uuid> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references(&self, out: &mut Vec<Uuid>) {
        match &self.kind {
            DataKind::Ref(id) => out.push(*id),
            DataKind::Vector(inner)
            | DataKind::Sequential(inner)
            | DataKind::Set(inner)
            | DataKind::Not(inner)
            | DataKind::Maybe(inner) => inner.collect_references(out),
            DataKind::MapOf { key, value } => {
                key.collect_references(out);
                value.collect_references(out);
            }
            DataKind::Tuple(members) | DataKind::Or(members) | DataKind::And(members) => {
                members.iter().for_each(|m| m.collect_references(out))
            }
            DataKind::Map(entries) => entries.values().for_each(|e| e.collect_references(out)),
            _ => {}
        }
    }
}
