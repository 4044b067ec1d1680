//! Names for anonymous nested shapes.
//!
//! The input grammar allows objects and enums without a name of their own,
//! and a `map-of` whose key and value sides may both contain such shapes.
//! Every node therefore receives a name synthesized from its parent's.

/// Structural position of a node relative to the node that contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRole {
    /// Nested `map` (object).
    Object,
    /// Nested `enum`.
    Enum,
    /// Key side of a `map-of`.
    Key,
    /// Value side of a `map-of`.
    Value,
    /// Any other child: takes the parent's name unchanged.
    Inherit,
}

impl NameRole {
    fn suffix(self) -> &'static str {
        match self {
            NameRole::Object => "Object",
            NameRole::Enum => "Enum",
            NameRole::Key => "Key",
            NameRole::Value => "Value",
            NameRole::Inherit => "",
        }
    }
}

/// Derive a child's name from its parent's name and its role.
pub fn synthesize_name(parent: &str, role: NameRole) -> String {
    format!("{}{}", parent, role.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes() {
        assert_eq!(synthesize_name("Order", NameRole::Object), "OrderObject");
        assert_eq!(synthesize_name("Order", NameRole::Enum), "OrderEnum");
        assert_eq!(synthesize_name("Prices", NameRole::Key), "PricesKey");
        assert_eq!(synthesize_name("Prices", NameRole::Value), "PricesValue");
        assert_eq!(synthesize_name("Order", NameRole::Inherit), "Order");
    }

    #[test]
    fn test_roles_compose() {
        let value = synthesize_name("Prices", NameRole::Value);
        assert_eq!(synthesize_name(&value, NameRole::Object), "PricesValueObject");
    }
}
