//! Python function builder.

use detroit_codegen::{CodeFragment, Renderable};

/// Builder for Python functions and methods.
#[derive(Debug, Clone)]
pub struct Def {
    name: String,
    decorators: Vec<String>,
    params: Vec<String>,
    doc: Vec<String>,
    body: Vec<String>,
}

impl Def {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decorators: Vec::new(),
            params: Vec::new(),
            doc: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Add a decorator, written without the `@`.
    pub fn decorator(mut self, decorator: impl Into<String>) -> Self {
        self.decorators.push(decorator.into());
        self
    }

    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.params.extend(params.into_iter().map(Into::into));
        self
    }

    /// Set the docstring, one entry per line.
    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

impl Renderable for Def {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .decorators
            .iter()
            .map(|decorator| CodeFragment::line(format!("@{}", decorator)))
            .collect();

        let mut body = Vec::new();
        if !self.doc.is_empty() {
            body.push(CodeFragment::Docstring(self.doc.clone()));
        }
        body.extend(self.body.iter().map(CodeFragment::line));
        if body.is_empty() {
            body.push(CodeFragment::line("pass"));
        }

        fragments.push(CodeFragment::block(
            format!("def {}({}):", self.name, self.params.join(", ")),
            body,
            None,
        ));
        fragments
    }
}
