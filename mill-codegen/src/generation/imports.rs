//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order and symbols are sorted, so rendered headers
/// are deterministic.
///
/// # Example
///
/// ```
/// use eventmill_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("java.util", "UUID");
/// imports.add("java.util", "List");
/// imports.add("com.acme.orders.schemas", "Address");
///
/// let lines: Vec<String> = imports
///     .iter()
///     .flat_map(|(module, symbols)| symbols.iter().map(move |s| format!("{module}.{s}")))
///     .collect();
/// assert_eq!(
///     lines,
///     ["java.util.List", "java.util.UUID", "com.acme.orders.schemas.Address"]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCollector {
    /// Module path -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add every symbol of `symbols` under `module`.
    pub fn extend<'a>(&mut self, module: &str, symbols: impl IntoIterator<Item = &'a str>) {
        for symbol in symbols {
            self.add(module, symbol);
        }
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.values().all(BTreeSet::is_empty)
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_and_sort() {
        let mut imports = ImportCollector::new();
        imports.add("java.util", "UUID");
        imports.add("java.util", "List");
        imports.add("java.util", "UUID");

        let (module, symbols) = imports.iter().next().unwrap();
        assert_eq!(module, "java.util");
        assert_eq!(symbols.iter().collect::<Vec<_>>(), ["List", "UUID"]);
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_module_insertion_order() {
        let mut imports = ImportCollector::new();
        imports.add("z.last", "A");
        imports.add("a.first", "B");
        let modules: Vec<_> = imports.iter().map(|(m, _)| m).collect();
        assert_eq!(modules, ["z.last", "a.first"]);
    }

    #[test]
    fn test_merge() {
        let mut a = ImportCollector::new();
        a.add("java.util", "List");
        let mut b = ImportCollector::new();
        b.extend("java.util", ["Map", "List"]);
        b.add("x.schemas", "Order");

        a.merge(&b);
        assert!(a.has_symbol("java.util", "Map"));
        assert!(a.has_symbol("x.schemas", "Order"));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(ImportCollector::new().is_empty());
        let mut imports = ImportCollector::new();
        imports.extend("java.util", std::iter::empty());
        assert!(imports.is_empty());
    }
}
