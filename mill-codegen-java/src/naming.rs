//! Java-specific naming conventions.

use eventmill_codegen::language::NamingConvention;
use eventmill_core::{to_field_name, to_type_name};

fn escape_java_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    // Types start upper-case, whitespace removed
    to_type: to_type_name,
    // Fields keep their first character, whitespace removed
    to_field: to_field_name,
    reserved_words: &[
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "false",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "null",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "true",
        "try",
        "void",
        "volatile",
        "while",
        "_",
    ],
    escape_reserved: escape_java_reserved,
};

/// Name of the string constant holding a field's pattern, e.g. `EMAIL_REGEX`.
pub fn regex_constant(field: &str, qualifier: Option<&str>) -> String {
    match qualifier {
        Some(qualifier) => format!(
            "{}_{}_REGEX",
            field.to_uppercase(),
            eventmill_core::format_name(qualifier).to_uppercase()
        ),
        None => format!("{}_REGEX", field.to_uppercase()),
    }
}

/// Accessor name for a field, e.g. `get` + `orderId` -> `getOrderId`.
pub fn accessor(prefix: &str, field: &str) -> String {
    format!("{}{}", prefix, eventmill_core::capitalize_first(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_naming_type() {
        assert_eq!(JAVA_NAMING.type_name("Order Placed"), "OrderPlaced");
        assert_eq!(JAVA_NAMING.type_name(" Summary "), "Summary");
    }

    #[test]
    fn test_java_naming_field() {
        assert_eq!(JAVA_NAMING.field_name("orderId"), "orderId");
        assert_eq!(JAVA_NAMING.field_name("Amount"), "Amount");
        assert_eq!(JAVA_NAMING.field_name("class"), "class_");
    }

    #[test]
    fn test_java_reserved_words() {
        assert!(JAVA_NAMING.is_reserved("enum"));
        assert!(JAVA_NAMING.is_reserved("package"));
        assert!(!JAVA_NAMING.is_reserved("order"));
    }

    #[test]
    fn test_regex_constant() {
        assert_eq!(regex_constant("email", None), "EMAIL_REGEX");
        assert_eq!(
            regex_constant("lookup", Some("OrderKey")),
            "LOOKUP_ORDERKEY_REGEX"
        );
    }

    #[test]
    fn test_accessor() {
        assert_eq!(accessor("get", "orderId"), "getOrderId");
        assert_eq!(accessor("set", "Amount"), "setAmount");
    }
}
