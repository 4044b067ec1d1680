//! ProjectOrchestrator: one Java project per bounded context.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use eventmill_codegen::{
    builder::{Indent, Mutability},
    generation::{NamespaceMode, PackageKind, ProjectLayout, ProjectMode, resolve_namespace},
    language::{FailedFile, GenerateResult, LanguageCodegen, PreviewFile},
    partition::{BoundedContext, ContextPartitioner},
    pipeline::CompilationContext,
};
use eventmill_core::{Diagnostic, GeneratedFile};
use eventmill_model::{DataKind, DataType, EventModel, Note, NoteKind};
use eyre::Result;
use indexmap::IndexMap;
use uuid::Uuid;

use crate::{
    ResolveError, TypeResolver,
    emitter::{ClassSource, CodeEmitter},
    files::{ClassJava, JavaSource},
};

const PHASE: &str = "generate";

/// Options controlling where and how projects are generated.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    pub namespace: NamespaceMode,
    pub project_mode: ProjectMode,
    pub indent: Indent,
}

/// Java code generator producing one project per bounded context.
pub struct Generator<'a> {
    model: &'a EventModel,
    contexts: Vec<BoundedContext>,
    options: GeneratorOptions,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.preview_files()
    }

    fn generate(&self, target: &Path) -> Result<GenerateResult> {
        self.generate_files(target)
    }
}

/// Everything one bounded context produces, before it touches the disk.
#[derive(Default)]
struct Emission {
    /// Keyed by path relative to the target directory; the first file for a
    /// path wins and a differing later one is reported.
    files: IndexMap<PathBuf, JavaSource>,
    failed: Vec<FailedFile>,
    diagnostics: Vec<Diagnostic>,
}

impl Emission {
    fn push(&mut self, file: impl Into<JavaSource>) {
        let file = file.into();
        let path = file.path(Path::new(""));
        match self.files.get(&path) {
            None => {
                self.files.insert(path, file);
            }
            Some(kept) if !kept.same_shape(&file) => self.diagnostics.push(
                Diagnostic::warning(
                    PHASE,
                    format!(
                        "'{}' is declared twice with different members, keeping the first",
                        path.display()
                    ),
                )
                .logged(),
            ),
            Some(_) => {}
        }
    }

    fn push_class(&mut self, name: &str, result: Result<ClassJava, ResolveError>) {
        match result {
            Ok(file) => self.push(file),
            Err(err) => {
                tracing::warn!(class = name, error = %err, "class not generated");
                self.failed.push(FailedFile {
                    target: name.to_string(),
                    error: err.to_string(),
                });
            }
        }
    }
}

impl<'a> Generator<'a> {
    /// Partition `model` and generate every stream.
    pub fn new(model: &'a EventModel, options: GeneratorOptions) -> Self {
        Self {
            model,
            contexts: ContextPartitioner::new(model).partition(),
            options,
        }
    }

    /// Generate from a pipeline run, reusing its bounded contexts.
    pub fn from_context(ctx: &'a CompilationContext, options: GeneratorOptions) -> Self {
        Self {
            model: &ctx.model,
            contexts: ctx.contexts().to_vec(),
            options,
        }
    }

    /// Base namespace every project package starts with.
    pub fn namespace(&self) -> String {
        resolve_namespace(self.model, &self.options.namespace)
    }

    fn layouts(&self) -> Vec<(&BoundedContext, ProjectLayout)> {
        let namespace = self.namespace();
        self.contexts
            .iter()
            .filter(|context| !context.is_empty())
            .map(|context| {
                let layout = ProjectLayout::new(context, &namespace, self.options.project_mode);
                (context, layout)
            })
            .collect()
    }

    fn preview_files(&self) -> Vec<PreviewFile> {
        self.layouts()
            .iter()
            .flat_map(|(context, layout)| self.emit_context(context, layout).files)
            .map(|(path, file)| PreviewFile {
                path: path.display().to_string(),
                content: file.render(),
            })
            .collect()
    }

    fn generate_files(&self, target: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult {
            skipped_contexts: self
                .contexts
                .iter()
                .filter(|c| c.is_empty())
                .map(|c| c.name.clone())
                .collect(),
            ..Default::default()
        };

        for (context, layout) in self.layouts() {
            if let Err(err) = layout.prepare(target) {
                result.diagnostics.push(
                    Diagnostic::error(PHASE, format!("{:#}", err))
                        .at(format!("streams.{}", context.name))
                        .logged(),
                );
                continue;
            }

            let emission = self.emit_context(context, &layout);
            result.diagnostics.extend(emission.diagnostics);
            result.failed.extend(emission.failed);

            let mut written = 0;
            for (relative, file) in emission.files {
                match file.write(target) {
                    Ok(path) => {
                        tracing::debug!(path = %path.display(), "wrote file");
                        result.written.push(relative);
                        written += 1;
                    }
                    Err(err) => {
                        tracing::warn!(path = %relative.display(), error = %err, "failed to write file");
                        result.failed.push(FailedFile {
                            target: relative.display().to_string(),
                            error: format!("{:#}", err),
                        });
                    }
                }
            }
            tracing::info!(project = %layout.name, files = written, "generated project");
        }

        Ok(result)
    }

    /// Notes of `context`: events, then commands, then read models, each in
    /// document order.
    fn notes_in(&self, context: &BoundedContext) -> Vec<(NoteKind, &'a Note)> {
        let model = self.model;
        [NoteKind::Event, NoteKind::Command, NoteKind::ReadModel]
            .into_iter()
            .flat_map(|kind| {
                model
                    .notes(kind)
                    .filter(move |note| {
                        model
                            .placements_of(kind)
                            .any(|p| p.note_id == note.id && context.contains(p.id))
                    })
                    .map(move |note| (kind, note))
            })
            .collect()
    }

    fn emit_context(&self, context: &BoundedContext, layout: &ProjectLayout) -> Emission {
        let emitter = CodeEmitter::new(TypeResolver::new(self.model), layout, self.options.indent);
        let mut emission = Emission::default();

        for (kind, note) in self.notes_in(context) {
            let schema = note.schema_id.and_then(|id| self.model.schema(id));

            if let Some(schema) = schema {
                let walk = SchemaWalk {
                    model: self.model,
                    emitter: &emitter,
                    note_description: note.description.as_deref(),
                };
                let mut visited = HashSet::new();
                walk.node(
                    &schema.data_type,
                    schema.description.as_deref(),
                    &mut visited,
                    &mut emission,
                );
            }

            let (package, mutability) = match kind {
                NoteKind::Event => (PackageKind::Events, Mutability::Immutable),
                NoteKind::Command => (PackageKind::Commands, Mutability::Immutable),
                _ => (PackageKind::ReadModels, Mutability::Mutable),
            };
            let source = ClassSource {
                name: &note.name,
                description: note.description.as_deref(),
                root: schema.map(|s| &s.data_type),
            };
            let result = emitter.class(package, source, mutability, &mut emission.diagnostics);
            emission.push_class(&note.name, result);
        }

        emission
    }
}

/// Emits the schema files a note depends on.
struct SchemaWalk<'w> {
    model: &'w EventModel,
    emitter: &'w CodeEmitter<'w>,
    /// Description given to every file emitted for a reference.
    note_description: Option<&'w str>,
}

impl SchemaWalk<'_> {
    /// Visit `dt`. `description` documents the entity emitted for a `map`.
    fn node(
        &self,
        dt: &DataType,
        description: Option<&str>,
        visited: &mut HashSet<Uuid>,
        emission: &mut Emission,
    ) {
        match &dt.kind {
            DataKind::Map(_) => {
                self.entity(dt, description, emission);
                self.children(dt, visited, emission);
            }
            DataKind::Ref(id) => self.reference(*id, visited, emission),
            _ => self.children(dt, visited, emission),
        }
    }

    fn children(&self, dt: &DataType, visited: &mut HashSet<Uuid>, emission: &mut Emission) {
        match &dt.kind {
            DataKind::Map(entries) => {
                for entry in entries.values() {
                    self.node(entry, None, visited, emission);
                }
            }
            DataKind::Vector(inner)
            | DataKind::Sequential(inner)
            | DataKind::Set(inner)
            | DataKind::Maybe(inner) => self.node(inner, None, visited, emission),
            DataKind::MapOf { key, value } => {
                self.node(key, None, visited, emission);
                self.node(value, None, visited, emission);
            }
            _ => {}
        }
    }

    /// The target's root becomes an enum file or an entity, documented with
    /// the referencing note's description.
    fn reference(&self, id: Uuid, visited: &mut HashSet<Uuid>, emission: &mut Emission) {
        if !visited.insert(id) {
            return;
        }
        let Some(target) = self.model.schema(id) else {
            // Reported when the referencing class fails
            return;
        };
        let root = &target.data_type;
        match &root.kind {
            DataKind::Enum(_) => emission.push(self.emitter.enum_file(root, self.note_description)),
            DataKind::Ref(_) => {
                self.entity(root, self.note_description, emission);
                self.node(root, None, visited, emission);
            }
            _ => {
                self.entity(root, self.note_description, emission);
                self.children(root, visited, emission);
            }
        }
    }

    fn entity(&self, dt: &DataType, description: Option<&str>, emission: &mut Emission) {
        let source = ClassSource {
            name: &dt.name,
            description,
            root: Some(dt),
        };
        let result = self.emitter.class(
            PackageKind::Schemas,
            source,
            Mutability::Mutable,
            &mut emission.diagnostics,
        );
        emission.push_class(&dt.name, result);
    }
}
