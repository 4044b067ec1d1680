//! CodeEmitter: turns notes and type trees into Java declarations.
//!
//! Two class flavours exist: mutable entities (schema objects, read models)
//! and immutable records (commands, events). Enums referenced as whole
//! schemas get their own file; enums inside a class are nested.

use std::collections::BTreeSet;

use eventmill_codegen::{
    builder::{ConstSpec, EnumSpec, FieldSpec, Indent, Mutability, StructSpec},
    generation::{ImportCollector, PackageKind, ProjectLayout},
};
use eventmill_core::Diagnostic;
use eventmill_model::{DataKind, DataType};
use indexmap::IndexMap;

use crate::{
    ResolveError, TypeResolver,
    ast::Javadoc,
    files::{ClassJava, EnumJava},
    naming::{JAVA_NAMING, regex_constant},
    type_mapper::{JAVA_UTIL, JavaTypeMapper},
};

const PHASE: &str = "emit";

/// What a class is generated from.
#[derive(Debug, Clone, Copy)]
pub struct ClassSource<'m> {
    /// Raw name, turned into the class name.
    pub name: &'m str,
    pub description: Option<&'m str>,
    /// Root of the attached schema, if any.
    pub root: Option<&'m DataType>,
}

/// Emits class and enum files into one project layout.
#[derive(Debug, Clone, Copy)]
pub struct CodeEmitter<'a> {
    resolver: TypeResolver<'a>,
    layout: &'a ProjectLayout,
    mapper: JavaTypeMapper,
    indent: Indent,
}

impl<'a> CodeEmitter<'a> {
    pub fn new(resolver: TypeResolver<'a>, layout: &'a ProjectLayout, indent: Indent) -> Self {
        Self {
            resolver,
            layout,
            mapper: JavaTypeMapper,
            indent,
        }
    }

    /// Build a class file in package `kind`.
    ///
    /// A `map` root is flattened into the class's own fields; any other root
    /// becomes a single field named after it. Fields with unsupported shapes
    /// are dropped with a warning pushed to `diagnostics`.
    pub fn class(
        &self,
        kind: PackageKind,
        source: ClassSource<'_>,
        mutability: Mutability,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<ClassJava, ResolveError> {
        let class_name = JAVA_NAMING.type_name(source.name);
        let mut spec = StructSpec::new(&class_name, mutability).doc(class_doc(&source));
        let mut imports = ImportCollector::new();
        let mut entity_imports = BTreeSet::new();
        // Enum name to (declaring field, symbols)
        let mut nested: IndexMap<String, (String, Vec<String>)> = IndexMap::new();

        for (entry, dt) in fields_of(source.root) {
            let field_name = JAVA_NAMING.field_name(entry);
            let ty = match self.resolver.type_ref(dt) {
                Ok(ty) => ty,
                Err(err) if err.is_field_local() => {
                    diagnostics.push(
                        Diagnostic::warning(PHASE, format!("field '{}' omitted: {}", field_name, err))
                            .at(format!("{}.{}", class_name, field_name))
                            .logged(),
                    );
                    continue;
                }
                Err(err) => return Err(err),
            };

            imports.extend(JAVA_UTIL, self.mapper.library_imports(&ty));
            entity_imports.extend(self.resolver.entity_imports(dt)?);

            let regexes = self.resolver.regexes(dt);
            let qualified = regexes.len() > 1;
            for (node, pattern) in regexes {
                let name = regex_constant(&field_name, qualified.then_some(node.as_str()));
                spec = spec.constant(ConstSpec::new(name, pattern));
            }
            for (name, symbols) in self.resolver.enums(dt) {
                match nested.get(&name) {
                    None => {
                        nested.insert(name, (field_name.clone(), symbols));
                    }
                    Some((first, kept)) if *kept != symbols => diagnostics.push(
                        Diagnostic::warning(
                            PHASE,
                            format!(
                                "nested enum '{}' of field '{}' differs from the one of field '{}', keeping the first",
                                name, field_name, first
                            ),
                        )
                        .at(format!("{}.{}", class_name, field_name))
                        .logged(),
                    ),
                    Some(_) => {}
                }
            }

            let mut field = FieldSpec::new(field_name, ty);
            if let Some(comment) = property_comment(dt) {
                field = field.comment(comment);
            }
            spec = spec.field(field);
        }

        for (name, (_, symbols)) in nested {
            spec = spec.nested_enum(EnumSpec::new(name).variants(symbols));
        }

        // Classes in the schemas package see their siblings without imports
        if kind != PackageKind::Schemas {
            let package = self.layout.package(PackageKind::Schemas);
            for name in &entity_imports {
                imports.add(&package, name);
            }
        }

        tracing::debug!(class = %class_name, package = kind.as_str(), "built class");
        Ok(ClassJava {
            dir: self.layout.package_dir(kind),
            package: self.layout.package(kind),
            imports,
            spec,
            indent: self.indent,
        })
    }

    /// Build a standalone enum file in the schemas package.
    pub fn enum_file(&self, root: &DataType, description: Option<&str>) -> EnumJava {
        let symbols = match &root.kind {
            DataKind::Enum(symbols) => symbols.iter().map(|s| eventmill_core::format_name(s)).collect(),
            _ => Vec::new(),
        };
        let doc = Javadoc::new()
            .description(description)
            .properties(root.properties().into_iter().flatten());
        EnumJava {
            dir: self.layout.package_dir(PackageKind::Schemas),
            package: self.layout.package(PackageKind::Schemas),
            spec: EnumSpec::new(JAVA_NAMING.type_name(&root.name))
                .doc(doc.lines().to_vec())
                .variants(symbols),
            indent: self.indent,
        }
    }
}

/// Fields of a class: the entries of a `map` root, or the root itself.
fn fields_of(root: Option<&DataType>) -> Vec<(&str, &DataType)> {
    match root {
        Some(DataType {
            kind: DataKind::Map(entries),
            ..
        }) => entries.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        Some(dt) => vec![(dt.name.as_str(), dt)],
        None => Vec::new(),
    }
}

/// Description, then the root's properties when the root is a `map`.
fn class_doc(source: &ClassSource<'_>) -> Vec<String> {
    let properties = source
        .root
        .filter(|dt| matches!(dt.kind, DataKind::Map(_)))
        .and_then(DataType::properties);
    Javadoc::new()
        .description(source.description)
        .properties(properties.into_iter().flatten())
        .lines()
        .to_vec()
}

/// Trailing field comment, e.g. `min - 1 | max - 10`.
fn property_comment(dt: &DataType) -> Option<String> {
    dt.properties().map(|properties| {
        properties
            .iter()
            .map(|(k, v)| format!("{} - {}", k, v))
            .collect::<Vec<_>>()
            .join(" | ")
    })
}
