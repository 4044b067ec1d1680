//! Type resolution: from schema type trees to Java types and the
//! declarations a field needs around it.

use std::collections::BTreeSet;

use eventmill_codegen::builder::{CollectionKind, PrimitiveType, TypeRef};
use eventmill_core::format_name;
use eventmill_model::{DataKind, DataType, EventModel, Schema, Shape};
use indexmap::IndexMap;
use thiserror::Error;
use uuid::Uuid;

use crate::naming::JAVA_NAMING;

/// Why a type tree could not be turned into a Java type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A `ref` node points at a schema id absent from the registry.
    #[error("reference to unknown schema {0}")]
    UnresolvedReference(Uuid),
    /// The shape has no field representation.
    #[error("'{name}' has unsupported shape '{shape}'")]
    Unsupported { name: String, shape: Shape },
}

impl ResolveError {
    /// Whether only the offending field is lost, not the whole file.
    pub fn is_field_local(&self) -> bool {
        matches!(self, ResolveError::Unsupported { .. })
    }
}

/// Resolves type trees against the model's schema registry.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    model: &'a EventModel,
}

impl<'a> TypeResolver<'a> {
    pub fn new(model: &'a EventModel) -> Self {
        Self { model }
    }

    /// Schema a `ref` node points at.
    pub fn target(&self, id: Uuid) -> Result<&'a Schema, ResolveError> {
        self.model
            .schema(id)
            .ok_or(ResolveError::UnresolvedReference(id))
    }

    /// Type name a `ref` node resolves to: the target root's class or enum.
    pub fn reference_name(&self, id: Uuid) -> Result<String, ResolveError> {
        let target = self.target(id)?;
        Ok(JAVA_NAMING.type_name(&target.data_type.name))
    }

    /// Language-agnostic type of a field holding `dt`.
    pub fn type_ref(&self, dt: &DataType) -> Result<TypeRef, ResolveError> {
        let ty = match &dt.kind {
            DataKind::String
            | DataKind::Re(_)
            | DataKind::Symbol
            | DataKind::QualifiedSymbol
            | DataKind::Keyword
            | DataKind::QualifiedKeyword => TypeRef::primitive(PrimitiveType::String),
            DataKind::Int => TypeRef::primitive(PrimitiveType::Int),
            DataKind::Double => TypeRef::primitive(PrimitiveType::Double),
            DataKind::Boolean => TypeRef::primitive(PrimitiveType::Bool),
            DataKind::Uuid => TypeRef::primitive(PrimitiveType::Uuid),
            DataKind::Any => TypeRef::primitive(PrimitiveType::Any),
            DataKind::Nil => TypeRef::primitive(PrimitiveType::Nil),
            DataKind::Vector(inner) => {
                TypeRef::collection(CollectionKind::Vector, self.type_ref(inner)?)
            }
            DataKind::Sequential(inner) => {
                TypeRef::collection(CollectionKind::Sequence, self.type_ref(inner)?)
            }
            DataKind::Set(inner) => TypeRef::collection(CollectionKind::Set, self.type_ref(inner)?),
            DataKind::MapOf { key, value } => {
                TypeRef::map(self.type_ref(key)?, self.type_ref(value)?)
            }
            DataKind::Maybe(inner) => TypeRef::optional(self.type_ref(inner)?),
            DataKind::Map(_) | DataKind::Enum(_) => TypeRef::named(JAVA_NAMING.type_name(&dt.name)),
            DataKind::Ref(id) => TypeRef::named(self.reference_name(*id)?),
            DataKind::Tuple(_)
            | DataKind::Or(_)
            | DataKind::And(_)
            | DataKind::Not(_)
            | DataKind::Unset => {
                return Err(ResolveError::Unsupported {
                    name: dt.name.clone(),
                    shape: dt.shape(),
                });
            }
        };
        Ok(ty)
    }

    /// Generated classes and enums in the schemas package that `dt` uses.
    ///
    /// Only collections, `map-of` and `maybe` are walked; nested enums are
    /// declared in place and never imported.
    pub fn entity_imports(&self, dt: &DataType) -> Result<BTreeSet<String>, ResolveError> {
        let mut imports = BTreeSet::new();
        self.collect_entity_imports(dt, &mut imports)?;
        Ok(imports)
    }

    fn collect_entity_imports(
        &self,
        dt: &DataType,
        imports: &mut BTreeSet<String>,
    ) -> Result<(), ResolveError> {
        match &dt.kind {
            DataKind::Map(_) => {
                imports.insert(JAVA_NAMING.type_name(&dt.name));
            }
            DataKind::Ref(id) => {
                imports.insert(self.reference_name(*id)?);
            }
            _ => {
                for child in walked_children(dt) {
                    self.collect_entity_imports(child, imports)?;
                }
            }
        }
        Ok(())
    }

    /// Patterns of `re` nodes reachable from `dt`, keyed by node name.
    pub fn regexes(&self, dt: &DataType) -> IndexMap<String, String> {
        let mut regexes = IndexMap::new();
        collect_regexes(dt, &mut regexes);
        regexes
    }

    /// Nested enums reachable from `dt`: type name to sanitized symbols.
    pub fn enums(&self, dt: &DataType) -> IndexMap<String, Vec<String>> {
        let mut enums = IndexMap::new();
        collect_enums(dt, &mut enums);
        enums
    }
}

/// Children followed when collecting imports, patterns and nested enums.
fn walked_children(dt: &DataType) -> Vec<&DataType> {
    match &dt.kind {
        DataKind::Vector(inner)
        | DataKind::Sequential(inner)
        | DataKind::Set(inner)
        | DataKind::Maybe(inner) => vec![inner.as_ref()],
        DataKind::MapOf { key, value } => vec![key.as_ref(), value.as_ref()],
        _ => Vec::new(),
    }
}

fn collect_regexes(dt: &DataType, regexes: &mut IndexMap<String, String>) {
    if let DataKind::Re(pattern) = &dt.kind {
        regexes.insert(dt.name.clone(), pattern.clone());
    }
    for child in walked_children(dt) {
        collect_regexes(child, regexes);
    }
}

fn collect_enums(dt: &DataType, enums: &mut IndexMap<String, Vec<String>>) {
    if let DataKind::Enum(symbols) = &dt.kind {
        let symbols = symbols.iter().map(|s| format_name(s)).collect();
        enums.insert(JAVA_NAMING.type_name(&dt.name), symbols);
    }
    for child in walked_children(dt) {
        collect_enums(child, enums);
    }
}

#[cfg(test)]
mod tests {
    use eventmill_codegen::builder::TypeMapper;

    use super::*;
    use crate::type_mapper::JavaTypeMapper;

    fn dt(name: &str, kind: DataKind) -> DataType {
        DataType::new(name, kind)
    }

    fn boxed(name: &str, kind: DataKind) -> Box<DataType> {
        Box::new(dt(name, kind))
    }

    fn model_with(id: Uuid, root: DataType) -> EventModel {
        let mut model = EventModel::default();
        model.schemas.insert(
            id,
            Schema {
                id,
                name: root.name.clone(),
                namespace: "payments".into(),
                description: None,
                data_type: root,
            },
        );
        model
    }

    #[test]
    fn test_nesting_is_preserved() {
        let model = EventModel::default();
        let resolver = TypeResolver::new(&model);
        let quantities = dt(
            "Summary",
            DataKind::Sequential(boxed(
                "Summary",
                DataKind::MapOf {
                    key: boxed("SummaryKey", DataKind::Uuid),
                    value: boxed("SummaryValue", DataKind::Int),
                },
            )),
        );

        let ty = resolver.type_ref(&quantities).unwrap();

        assert_eq!(ty.depth(), 2);
        let TypeRef::Collection { kind, element } = &ty else {
            panic!("expected a collection, got {ty:?}");
        };
        assert_eq!(*kind, CollectionKind::Sequence);
        let TypeRef::Map { key, value } = element.as_ref() else {
            panic!("expected a map, got {element:?}");
        };
        assert_eq!(**key, TypeRef::primitive(PrimitiveType::Uuid));
        assert_eq!(**value, TypeRef::primitive(PrimitiveType::Int));
        assert_eq!(JavaTypeMapper.render_type(&ty), "List<Map<UUID, Integer>>");
    }

    #[test]
    fn test_reference_resolves_to_target_name() {
        let id = Uuid::from_u128(7);
        let model = model_with(
            id,
            dt("currency", DataKind::Enum(vec!["A".into(), "B".into()])),
        );
        let resolver = TypeResolver::new(&model);
        let field = dt("PaymentCurrency", DataKind::Ref(id));

        assert_eq!(resolver.type_ref(&field).unwrap(), TypeRef::named("Currency"));
        assert_eq!(
            resolver.entity_imports(&field).unwrap().into_iter().collect::<Vec<_>>(),
            ["Currency"]
        );
    }

    #[test]
    fn test_unresolved_reference() {
        let model = EventModel::default();
        let resolver = TypeResolver::new(&model);
        let missing = Uuid::from_u128(99);
        let field = dt("Customer", DataKind::Vector(boxed("Customer", DataKind::Ref(missing))));

        let err = resolver.type_ref(&field).unwrap_err();
        assert_eq!(err, ResolveError::UnresolvedReference(missing));
        assert!(!err.is_field_local());
        assert!(resolver.entity_imports(&field).is_err());
    }

    #[test]
    fn test_combinators_are_unsupported() {
        let model = EventModel::default();
        let resolver = TypeResolver::new(&model);
        let field = dt(
            "Choice",
            DataKind::Or(vec![dt("Choice", DataKind::Int), dt("Choice", DataKind::String)]),
        );

        let err = resolver.type_ref(&field).unwrap_err();
        assert!(err.is_field_local());
        assert_eq!(err.to_string(), "'Choice' has unsupported shape 'or'");
    }

    #[test]
    fn test_entity_imports_skip_combinators() {
        let model = EventModel::default();
        let resolver = TypeResolver::new(&model);
        let object = dt("OrderObject", DataKind::Map(IndexMap::new()));
        let field = dt("Order", DataKind::Tuple(vec![object.clone()]));

        assert!(resolver.entity_imports(&field).unwrap().is_empty());
        let listed = dt("Order", DataKind::Set(Box::new(object)));
        assert_eq!(
            resolver.entity_imports(&listed).unwrap().into_iter().collect::<Vec<_>>(),
            ["OrderObject"]
        );
    }

    #[test]
    fn test_regexes_and_enums_through_containers() {
        let model = EventModel::default();
        let resolver = TypeResolver::new(&model);
        let field = dt(
            "Lookup",
            DataKind::MapOf {
                key: boxed("LookupKey", DataKind::Re("^[a-z]+$".into())),
                value: boxed(
                    "LookupValueEnum",
                    DataKind::Enum(vec![" LOW ".into(), "HIGH".into()]),
                ),
            },
        );

        let regexes = resolver.regexes(&field);
        assert_eq!(regexes.get("LookupKey").map(String::as_str), Some("^[a-z]+$"));

        let enums = resolver.enums(&field);
        assert_eq!(enums["LookupValueEnum"], ["LOW", "HIGH"]);
    }

    #[test]
    fn test_scalar_extensions() {
        let model = EventModel::default();
        let resolver = TypeResolver::new(&model);
        let mapper = JavaTypeMapper;

        for kind in [DataKind::Symbol, DataKind::QualifiedKeyword, DataKind::Re("x".into())] {
            let ty = resolver.type_ref(&dt("f", kind)).unwrap();
            assert_eq!(mapper.render_type(&ty), "String");
        }
        let maybe = dt("f", DataKind::Maybe(boxed("f", DataKind::Int)));
        assert_eq!(mapper.render_type(&resolver.type_ref(&maybe).unwrap()), "Integer");
        let any = resolver.type_ref(&dt("f", DataKind::Any)).unwrap();
        assert_eq!(mapper.render_type(&any), "Object");
    }

    #[test]
    fn test_unset_has_no_type() {
        let model = EventModel::default();
        let resolver = TypeResolver::new(&model);

        let err = resolver.type_ref(&dt("f", DataKind::Unset)).unwrap_err();
        assert!(err.is_field_local());

        let nested = dt("f", DataKind::Vector(boxed("f", DataKind::Unset)));
        assert!(resolver.type_ref(&nested).unwrap_err().is_field_local());
    }
}
