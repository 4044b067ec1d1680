//! Identifier naming rules shared by the parser and the code generators.

/// Strip surrounding whitespace and remove any internal whitespace
/// (e.g., " Order Placed " -> "OrderPlaced").
pub fn format_name(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first character, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Name used for classes and enums (e.g., "order Placed" -> "OrderPlaced").
pub fn to_type_name(s: &str) -> String {
    capitalize_first(&format_name(s))
}

/// Name used for fields and parameters; the first character keeps its case.
pub fn to_field_name(s: &str) -> String {
    format_name(s)
}
