//! A complete Java compilation unit.

use super::{CodeBuilder, ImportCollector};

/// A Java source file: package line, imports, and the type body.
///
/// The body is built with [`CodeBuilder`]; imports are collected by name
/// and rendered sorted. No positional template slots anywhere.
#[derive(Debug, Clone)]
pub struct JavaFile {
    package: String,
    imports: ImportCollector,
    body: String,
}

impl JavaFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: ImportCollector::new(),
            body: String::new(),
        }
    }

    /// Add one fully-qualified import.
    pub fn import(mut self, import: &str) -> Self {
        self.imports.add(import);
        self
    }

    /// Add several fully-qualified imports.
    pub fn imports<'a>(mut self, imports: impl IntoIterator<Item = &'a str>) -> Self {
        for i in imports {
            self.imports.add(i);
        }
        self
    }

    /// Build the type body.
    pub fn body<F>(mut self, f: F) -> Self
    where
        F: FnOnce(CodeBuilder) -> CodeBuilder,
    {
        self.body = f(CodeBuilder::new()).build();
        self
    }

    /// Render the full compilation unit.
    pub fn render(&self) -> String {
        let mut out = format!("package {};\n\n", self.package);
        if !self.imports.is_empty() {
            out.push_str(&self.imports.render());
            out.push('\n');
        }
        out.push_str(&self.body);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_package_imports_body() {
        let file = JavaFile::new("com.example.dto")
            .import("java.util.List")
            .body(|b| b.block("public class Foo {", |b| b.line("private int x;")));

        let rendered = file.render();
        assert!(rendered.starts_with("package com.example.dto;\n\nimport java.util.List;\n\n"));
        assert!(rendered.contains("public class Foo {"));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn test_render_without_imports_has_no_blank_import_block() {
        let file = JavaFile::new("com.example").body(|b| b.line("public enum E { A }"));
        assert_eq!(
            file.render(),
            "package com.example;\n\npublic enum E { A }\n"
        );
    }
}
