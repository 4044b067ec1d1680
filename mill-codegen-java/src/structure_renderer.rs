//! Java implementation of StructureRenderer.
//!
//! # Java Mapping
//!
//! - `StructSpec` (mutable) → `public class` with no-args and all-args
//!   constructors, getters, setters and `toString()`
//! - `StructSpec` (immutable) → `public final class` with final fields, an
//!   all-args constructor, getters and `toString()`
//! - `EnumSpec` → `public enum` with bare symbols

use eventmill_codegen::builder::{
    CodeFragment, EnumSpec, FieldSpec, Mutability, Renderable, StructSpec, StructureRenderer,
    TypeMapper,
};

use crate::{
    ast::{Class, Constant, Field, JavaEnum, Javadoc, Method, Param},
    naming::accessor,
    type_mapper::JavaTypeMapper,
};

/// Java implementation of StructureRenderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaStructureRenderer {
    type_mapper: JavaTypeMapper,
}

impl JavaStructureRenderer {
    pub fn new() -> Self {
        Self {
            type_mapper: JavaTypeMapper,
        }
    }

    fn params(&self, spec: &StructSpec) -> Vec<Param> {
        spec.fields
            .iter()
            .map(|f| Param::new(&f.name, self.type_mapper.render_type(&f.ty)))
            .collect()
    }
}

impl StructureRenderer for JavaStructureRenderer {
    fn render_struct(&self, spec: &StructSpec) -> Vec<CodeFragment> {
        let params = self.params(spec);

        let constants: Vec<CodeFragment> = spec
            .constants
            .iter()
            .flat_map(|c| Constant::new(&c.name, &c.value).to_fragments())
            .collect();
        let fields: Vec<CodeFragment> = spec
            .fields
            .iter()
            .map(|f| CodeFragment::line(self.render_field(f, spec.mutability)))
            .collect();
        let enums = spec.enums.iter().map(|e| self.render_enum(e));

        let mut class = Class::new(&spec.name)
            .doc(Javadoc::from(spec.doc.clone()))
            .group(constants)
            .group(fields);
        if !spec.is_mutable() {
            class = class.final_();
        }
        for fragments in enums {
            class = class.group(fragments);
        }

        if spec.is_mutable() {
            class = class.each([Method::constructor(&spec.name)]);
        }
        if !spec.has_fields() {
            return class.to_fragments();
        }

        let all_args = Method::constructor(&spec.name)
            .params(params.iter().cloned())
            .lines(params.iter().map(|p| format!("this.{0} = {0};", p.name)));
        class = class.each([all_args]);

        for param in &params {
            let getter = Method::new(accessor("get", &param.name), &param.ty)
                .line(format!("return {};", param.name));
            class = class.each([getter]);
            if spec.is_mutable() {
                let setter = Method::new(accessor("set", &param.name), "void")
                    .param(param.clone())
                    .line(format!("this.{0} = {0};", param.name));
                class = class.each([setter]);
            }
        }

        class.each([to_string(&spec.name, &params)]).to_fragments()
    }

    fn render_enum(&self, spec: &EnumSpec) -> Vec<CodeFragment> {
        JavaEnum::new(&spec.name)
            .doc(Javadoc::from(spec.doc.clone()))
            .variants(spec.variants.iter().cloned())
            .to_fragments()
    }

    fn render_field(&self, spec: &FieldSpec, mutability: Mutability) -> String {
        let field = Field::new(&spec.name, self.type_mapper.render_type(&spec.ty))
            .comment(spec.comment.clone());
        match mutability {
            Mutability::Mutable => field.declaration(),
            Mutability::Immutable => field.final_().declaration(),
        }
    }
}

/// `toString()` listing every field: `Name [a=" + a + ", b=" + b + "]`.
fn to_string(class_name: &str, params: &[Param]) -> Method {
    let listed = params
        .iter()
        .map(|p| format!("{0}=\" + {0} + \"", p.name))
        .collect::<Vec<_>>()
        .join(", ");
    Method::new("toString", "String")
        .annotation("@Override")
        .line(format!("return \"{} [{}]\";", class_name, listed))
}
