//! Code builder utility for generating properly indented Java code.

const INDENT: &str = "    ";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use sprout_codegen::java::CodeBuilder;
///
/// let code = CodeBuilder::new()
///     .block("public class Foo {", |b| {
///         b.line("private int bar;")
///     })
///     .build();
///
/// assert_eq!(code, "public class Foo {\n    private int bar;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add several lines at the current indentation.
    pub fn lines<'a>(mut self, lines: impl IntoIterator<Item = &'a str>) -> Self {
        for l in lines {
            self.push_line(l);
        }
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `/** ... */` Javadoc comment from the given lines.
    pub fn javadoc<'a>(mut self, lines: impl IntoIterator<Item = &'a str>) -> Self {
        self.push_line("/**");
        for l in lines {
            if l.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {l}"));
            }
        }
        self.push_line(" */");
        self
    }

    /// Add an annotation line, e.g. `@Override`.
    pub fn annotation(self, s: &str) -> Self {
        self.line(s)
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a braced block, closing it with `}`.
    ///
    /// The header is emitted as-is, the body one level deeper.
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line("}")
    }

    /// Add a braced block with a custom closing line (e.g. `});`).
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Apply `f` to the builder only when `cond` holds.
    pub fn when<F>(self, cond: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if cond { f(self) } else { self }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn push_line(&mut self, s: &str) {
        if !s.is_empty() {
            for _ in 0..self.indent_level {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_indent() {
        let code = CodeBuilder::new()
            .line("class A {")
            .indent()
            .line("int x;")
            .dedent()
            .line("}")
            .build();
        assert_eq!(code, "class A {\n    int x;\n}\n");
    }

    #[test]
    fn test_block_closes_brace() {
        let code = CodeBuilder::new()
            .block("void f() {", |b| b.line("return;"))
            .build();
        assert_eq!(code, "void f() {\n    return;\n}\n");
    }

    #[test]
    fn test_javadoc() {
        let code = CodeBuilder::new().javadoc(["Hello.", "", "World."]).build();
        assert_eq!(code, "/**\n * Hello.\n *\n * World.\n */\n");
    }

    #[test]
    fn test_when_skips_body() {
        let code = CodeBuilder::new()
            .when(false, |b| b.line("skipped"))
            .when(true, |b| b.line("kept"))
            .build();
        assert_eq!(code, "kept\n");
    }

    #[test]
    fn test_blank_line_carries_no_indent() {
        let code = CodeBuilder::new().indent().line("").build();
        assert_eq!(code, "\n");
    }
}
