//! Method and constructor declarations.

use eventmill_codegen::builder::{CodeFragment, Renderable};

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A public method or constructor.
///
/// Constructors have no return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    returns: Option<String>,
    params: Vec<Param>,
    annotations: Vec<String>,
    body: Vec<String>,
}

impl Method {
    /// A method returning `returns` (`void` included).
    pub fn new(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returns: Some(returns.into()),
            params: Vec::new(),
            annotations: Vec::new(),
            body: Vec::new(),
        }
    }

    /// A constructor of class `class_name`.
    pub fn constructor(class_name: impl Into<String>) -> Self {
        Self {
            name: class_name.into(),
            returns: None,
            params: Vec::new(),
            annotations: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn lines(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.body.extend(lines);
        self
    }

    fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");
        match &self.returns {
            Some(returns) => format!("public {} {}({}) {{", returns, self.name, params),
            None => format!("public {}({}) {{", self.name, params),
        }
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> =
            self.annotations.iter().map(CodeFragment::line).collect();
        fragments.push(CodeFragment::block(
            self.signature(),
            self.body.iter().map(CodeFragment::line).collect(),
            Some("}".to_string()),
        ));
        fragments
    }
}
