//! Python class builder.

use detroit_codegen::{CodeFragment, Renderable};

use super::Def;

/// Builder for Python classes. Methods are separated by one blank line.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    doc: Vec<String>,
    methods: Vec<Def>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn doc(mut self, lines: Vec<String>) -> Self {
        self.doc = lines;
        self
    }

    pub fn method(mut self, method: Def) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Def>) -> Self {
        self.methods.extend(methods);
        self
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();
        if !self.doc.is_empty() {
            body.push(CodeFragment::Docstring(self.doc.clone()));
        }
        for method in &self.methods {
            if !body.is_empty() {
                body.push(CodeFragment::Blank);
            }
            body.extend(method.to_fragments());
        }
        if body.is_empty() {
            body.push(CodeFragment::line("pass"));
        }

        vec![CodeFragment::block(
            format!("class {}:", self.name),
            body,
            None,
        )]
    }
}

#[cfg(test)]
mod tests {
    use detroit_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_class_layout() {
        let class = Class::new("Plot")
            .doc(vec!["Observable Plot.".to_string()])
            .method(Def::new("__repr__").param("self").body_line("return self.content"))
            .method(Def::new("__str__").param("self").body_line("return self.content"));

        let mut builder = CodeBuilder::python();
        builder.emit(&class);
        insta::assert_snapshot!(builder.build(), @r#"
        class Plot:
            """Observable Plot."""

            def __repr__(self):
                return self.content

            def __str__(self):
                return self.content
        "#);
    }

    #[test]
    fn test_empty_class() {
        let mut builder = CodeBuilder::python();
        builder.emit(&Class::new("Empty"));
        assert_eq!(builder.build(), "class Empty:\n    pass\n");
    }
}
