//! Import collection for generated Java files.

use std::collections::BTreeSet;

/// Tracks fully-qualified imports and deduplicates them.
///
/// Java renders one import per line; a sorted set keeps the output
/// deterministic regardless of the order generators add them in.
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: BTreeSet<String>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fully-qualified import, e.g. `java.util.List`.
    pub fn add(&mut self, import: &str) {
        self.imports.insert(import.to_string());
    }

    pub fn contains(&self, import: &str) -> bool {
        self.imports.contains(import)
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Render as `import x.y.Z;` lines, sorted, one per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for import in &self.imports {
            out.push_str("import ");
            out.push_str(import);
            out.push_str(";\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sorted_and_deduplicated() {
        let mut imports = ImportCollector::new();
        imports.add("java.util.List");
        imports.add("jakarta.validation.Valid");
        imports.add("java.util.List");

        assert_eq!(
            imports.render(),
            "import jakarta.validation.Valid;\nimport java.util.List;\n"
        );
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(ImportCollector::new().render(), "");
    }
}
