//! Structured Python file generation: a header comment, import groups, then
//! top-level items separated by two blank lines.

use detroit_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A `from module import a, b` statement.
#[derive(Debug, Clone)]
pub struct Import {
    module: String,
    names: Vec<String>,
}

impl Import {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            names: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "from {} import {}",
            self.module,
            self.names.join(", ")
        ))]
    }
}

/// A structured representation of a Python module.
#[derive(Debug, Default)]
pub struct PyFile {
    /// Import groups, separated by a blank line
    imports: Vec<Vec<Import>>,
    body: Vec<Vec<CodeFragment>>,
}

impl PyFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group of imports; empty groups are ignored.
    pub fn import_group(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        let group: Vec<Import> = imports.into_iter().collect();
        if !group.is_empty() {
            self.imports.push(group);
        }
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::PYTHON);

        for (i, group) in self.imports.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for import in group {
                builder.emit(import);
            }
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 || !self.imports.is_empty() {
                builder.push_blank().push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Render with `header` as leading `#` comments.
    pub fn render_with_header(&self, header: &str) -> String {
        let comment = header
            .lines()
            .map(|line| format!("# {}", line).trim_end().to_string())
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
