//! Renderable trait and CodeFragment for decoupled code generation.

/// A fragment of generated code, between AST nodes and the final string.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A Rust doc comment line; empty text gives a bare `///`.
    RustDoc(String),
    /// A Python docstring, one entry per line.
    Docstring(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn rust_doc(s: impl Into<String>) -> Self {
        Self::RustDoc(s.into())
    }

    /// Rust doc comment lines for a multi-line Markdown text.
    pub fn rust_docs(text: &str) -> Vec<Self> {
        text.lines().map(|line| Self::RustDoc(line.to_string())).collect()
    }
}

/// Types that can be converted to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_docs_keep_blank_lines() {
        let docs = CodeFragment::rust_docs("First.\n\nSecond.");
        assert_eq!(
            docs,
            vec![
                CodeFragment::RustDoc("First.".into()),
                CodeFragment::RustDoc(String::new()),
                CodeFragment::RustDoc("Second.".into()),
            ]
        );
    }
}
