//! Rust impl block builder.

use detroit_codegen::{CodeFragment, Renderable};

use super::Fn;

/// An associated constant.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    ty: String,
    value: String,
    doc: Option<String>,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> =
            self.doc.iter().map(CodeFragment::rust_doc).collect();
        fragments.push(CodeFragment::line(format!(
            "pub const {}: {} = {};",
            self.name, self.ty, self.value
        )));
        fragments
    }
}

/// Builder for Rust impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    trait_name: Option<String>,
    consts: Vec<Const>,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            trait_name: None,
            consts: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Create an impl block for a trait.
    pub fn for_trait(mut self, trait_name: impl Into<String>) -> Self {
        self.trait_name = Some(trait_name.into());
        self
    }

    pub fn constant(mut self, constant: Const) -> Self {
        self.consts.push(constant);
        self
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Fn>) -> Self {
        self.methods.extend(methods);
        self
    }

    fn format_header(&self) -> String {
        match &self.trait_name {
            Some(trait_name) => format!("impl {} for {} {{", trait_name, self.type_name),
            None => format!("impl {} {{", self.type_name),
        }
    }

    /// Items separated by blank lines.
    fn items_to_fragments(&self) -> Vec<CodeFragment> {
        let items = self
            .consts
            .iter()
            .map(Renderable::to_fragments)
            .chain(self.methods.iter().map(Renderable::to_fragments));

        let mut fragments = Vec::new();
        for (i, item) in items.enumerate() {
            if i > 0 {
                fragments.push(CodeFragment::Blank);
            }
            fragments.extend(item);
        }
        fragments
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.format_header(),
            self.items_to_fragments(),
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use detroit_codegen::CodeBuilder;

    use super::*;
    use crate::ast::Param;

    fn build(i: &Impl) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(i);
        builder.build()
    }

    #[test]
    fn test_impl_for_trait() {
        let i = Impl::new("Plot").for_trait("Default").method(
            Fn::new("default")
                .private()
                .returns("Self")
                .body_line("Self::new()"),
        );
        assert_eq!(
            build(&i),
            "impl Default for Plot {\n    fn default() -> Self {\n        Self::new()\n    }\n}\n"
        );
    }

    #[test]
    fn test_const_then_methods() {
        let i = Impl::new("Plot")
            .constant(Const::new("ROOT", "&'static str", "\"Plot\"").doc("Root."))
            .method(
                Fn::new("content")
                    .param(Param::receiver())
                    .returns("&str")
                    .body_line("self.chain.content()"),
            );
        let code = build(&i);
        assert!(code.starts_with(
            "impl Plot {\n    /// Root.\n    pub const ROOT: &'static str = \"Plot\";\n\n    pub fn content(&self) -> &str {\n"
        ));
    }
}
