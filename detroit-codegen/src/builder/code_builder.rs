//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods prefixed with `push_` (returning `&mut Self`).
///
/// ```
/// use detroit_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::python()
///     .line("class Plot:")
///     .indent()
///     .line("pass")
///     .dedent()
///     .build();
///
/// assert_eq!(code, "class Plot:\n    pass\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    pub fn python() -> Self {
        Self::new(Indent::PYTHON)
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        if !s.is_empty() {
            self.write_indent();
            self.buffer.push_str(s);
        }
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a Rust doc comment (mutable). An empty text gives a bare `///`.
    pub fn push_rust_doc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        if text.is_empty() {
            self.buffer.push_str("///\n");
        } else {
            self.buffer.push_str("/// ");
            self.buffer.push_str(text);
            self.buffer.push('\n');
        }
        self
    }

    /// Add a Python docstring (mutable).
    ///
    /// A single line stays on one line; longer docstrings open and close on
    /// their own lines.
    pub fn push_docstring(&mut self, lines: &[String]) -> &mut Self {
        match lines {
            [] => self,
            [line] => self.push_line(&format!("\"\"\"{}\"\"\"", escape_docstring(line))),
            _ => {
                self.push_line("\"\"\"");
                for line in lines {
                    self.push_line(&escape_docstring(line));
                }
                self.push_line("\"\"\"")
            }
        }
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::RustDoc(text) => {
                self.push_rust_doc(&text);
            }
            CodeFragment::Docstring(lines) => {
                self.push_docstring(&lines);
            }
        }
    }

    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

fn escape_docstring(line: &str) -> String {
    line.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::rust()
            .line("impl Plot {")
            .indent()
            .line("const ROOT: &str = \"Plot\";")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "impl Plot {\n    const ROOT: &str = \"Plot\";\n}\n");
    }

    #[test]
    fn test_empty_line_has_no_trailing_whitespace() {
        let code = CodeBuilder::python().indent().line("").line("pass").build();
        assert_eq!(code, "\n    pass\n");
    }

    #[test]
    fn test_rust_doc() {
        let mut builder = CodeBuilder::rust();
        builder
            .push_rust_doc("Draws circles.")
            .push_rust_doc("")
            .push_line("fn dot() {}");

        assert_eq!(builder.build(), "/// Draws circles.\n///\nfn dot() {}\n");
    }

    #[test]
    fn test_single_line_docstring() {
        let mut builder = CodeBuilder::python();
        builder.push_docstring(&["Draws circles.".to_string()]);
        assert_eq!(builder.build(), "\"\"\"Draws circles.\"\"\"\n");
    }

    #[test]
    fn test_multi_line_docstring() {
        let mut builder = CodeBuilder::python();
        builder
            .push_indent()
            .push_docstring(&["First.".to_string(), String::new(), "C:\\path".to_string()]);
        assert_eq!(
            builder.build(),
            "    \"\"\"\n    First.\n\n    C:\\\\path\n    \"\"\"\n"
        );
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "class Plot:",
                    vec![CodeFragment::line("pass")],
                    None,
                )]
            }
        }

        let mut builder = CodeBuilder::python();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "class Plot:\n    pass\n");
    }
}
