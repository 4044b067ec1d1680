//! Field and constant declarations.

use eventmill_codegen::builder::{CodeFragment, Renderable};

/// A private instance field, e.g. `private final UUID orderId; // min - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub is_final: bool,
    pub comment: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_final: false,
            comment: None,
        }
    }

    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn declaration(&self) -> String {
        let modifiers = if self.is_final { "private final" } else { "private" };
        match &self.comment {
            Some(comment) => format!("{} {} {}; // {}", modifiers, self.ty, self.name, comment),
            None => format!("{} {} {};", modifiers, self.ty, self.name),
        }
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.declaration())]
    }
}

/// A `public static final String` constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    pub name: String,
    pub value: String,
}

impl Constant {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Renderable for Constant {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "public static final String {} = \"{}\";",
            self.name,
            escape_string(&self.value)
        ))]
    }
}

/// Escape a value for a Java string literal.
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_declaration() {
        assert_eq!(Field::new("orderId", "UUID").declaration(), "private UUID orderId;");
        assert_eq!(
            Field::new("quantity", "int")
                .final_()
                .comment(Some("min - 1 | max - 9".into()))
                .declaration(),
            "private final int quantity; // min - 1 | max - 9"
        );
    }

    #[test]
    fn test_constant_escapes_pattern() {
        let constant = Constant::new("EMAIL_REGEX", r#"^[^@\s]+@"x"$"#);
        assert_eq!(
            constant.to_fragments(),
            vec![CodeFragment::Line(
                r#"public static final String EMAIL_REGEX = "^[^@\\s]+@\"x\"$";"#.to_string()
            )]
        );
    }
}
