//! Rust struct builder.

use detroit_codegen::{CodeFragment, Renderable};

/// A field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub is_public: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_public: true,
        }
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }
}

/// Builder for Rust structs.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    doc: Vec<String>,
    derives: Vec<String>,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            derives: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Append doc comment lines; Markdown text is split on newlines.
    pub fn doc(mut self, doc: &str) -> Self {
        self.doc.extend(doc.lines().map(str::to_string));
        self
    }

    pub fn derive(mut self, derive: impl Into<String>) -> Self {
        self.derives.push(derive.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> =
            self.doc.iter().map(CodeFragment::rust_doc).collect();

        if !self.derives.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }

        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!("pub struct {};", self.name)));
        } else {
            let body = self
                .fields
                .iter()
                .map(|field| {
                    let vis = if field.is_public { "pub " } else { "" };
                    CodeFragment::line(format!("{}{}: {},", vis, field.name, field.ty))
                })
                .collect();
            fragments.push(CodeFragment::block(
                format!("pub struct {} {{", self.name),
                body,
                Some("}".to_string()),
            ));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use detroit_codegen::CodeBuilder;

    use super::*;

    fn build(s: &Struct) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(s);
        builder.build()
    }

    #[test]
    fn test_unit_struct() {
        assert_eq!(build(&Struct::new("Empty")), "pub struct Empty;\n");
    }

    #[test]
    fn test_struct_with_private_field() {
        let s = Struct::new("Plot")
            .doc("Observable Plot.\n\nSee more information: https://observablehq.com/plot/")
            .derive("Debug")
            .derive("Clone")
            .field(Field::new("chain", "Chain").private());
        assert_eq!(
            build(&s),
            "/// Observable Plot.\n///\n/// See more information: https://observablehq.com/plot/\n#[derive(Debug, Clone)]\npub struct Plot {\n    chain: Chain,\n}\n"
        );
    }
}
