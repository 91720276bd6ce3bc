//! Structured Rust file generation: a header comment, use statements, then
//! body items separated by blank lines.

use detroit_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A Rust use statement.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    symbols: Vec<String>,
}

impl Use {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    fn format(&self) -> String {
        match self.symbols.as_slice() {
            [] => format!("use {};", self.module),
            [symbol] => format!("use {}::{};", self.module, symbol),
            symbols => format!("use {}::{{{}}};", self.module, symbols.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

/// Raw lines of code placed in a file body as-is.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}

/// A structured representation of a Rust source file.
///
/// ```
/// use detroit_codegen_rust::{RawCode, RustFile, Use};
///
/// let code = RustFile::new()
///     .use_stmt(Use::new("detroit_chain").symbols(["Chain", "Rendering"]))
///     .add(RawCode::new("pub struct Plot;"))
///     .render_with_header("Generated by detroit. Do not edit.");
///
/// assert_eq!(
///     code,
///     "// Generated by detroit. Do not edit.\n\nuse detroit_chain::{Chain, Rendering};\n\npub struct Plot;\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct RustFile {
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    pub fn use_stmts(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        self.uses.extend(uses);
        self
    }

    /// Add a body item.
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        self.body
            .extend(nodes.into_iter().map(|node| node.to_fragments()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.uses.is_empty() && self.body.is_empty()
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::RUST);

        for use_stmt in &self.uses {
            builder.emit(use_stmt);
        }
        if !self.uses.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Render with `header` as a leading line comment.
    pub fn render_with_header(&self, header: &str) -> String {
        let comment = header
            .lines()
            .map(|line| format!("// {}", line).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", comment)
        } else {
            format!("{}\n\n{}", comment, content)
        }
    }
}
