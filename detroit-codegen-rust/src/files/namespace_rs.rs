use std::path::{Path, PathBuf};

use detroit_catalog::Rendering;
use detroit_codegen::{MethodPlan, NamespacePlan};
use detroit_core::GeneratedFile;

use crate::{
    Const, Field, Fn, Impl, Param, RawCode, RustFile, Struct, Use,
    doc::{doc_lines, method_doc_lines},
};

/// One namespace type: `{output}/{file_stem}.rs`.
pub struct NamespaceRs<'a> {
    namespace: &'a NamespacePlan,
    header: &'a str,
    runtime: &'a str,
}

impl<'a> NamespaceRs<'a> {
    pub fn new(namespace: &'a NamespacePlan, header: &'a str, runtime: &'a str) -> Self {
        Self {
            namespace,
            header,
            runtime,
        }
    }

    fn uses(&self) -> Vec<Use> {
        let mut uses =
            vec![Use::new(self.runtime).symbols(["Chain", "IntoArgs", "Rendering"])];
        uses.extend(self.namespace.imports.iter().map(|import| {
            Use::new(format!("super::{}", import.module)).symbol(&import.type_name)
        }));
        uses
    }

    fn rendering(&self) -> RawCode {
        let variant = match self.namespace.rendering {
            Rendering::Repr => "Repr",
            Rendering::Plain => "Plain",
        };
        RawCode::new(format!("const RENDERING: Rendering = Rendering::{};", variant))
    }

    fn type_struct(&self) -> Struct {
        let ns = self.namespace;
        let mut doc = doc_lines(&ns.doc);
        if let Some(url) = &ns.url {
            if !doc.is_empty() {
                doc.push(String::new());
            }
            doc.push(format!("See more information: <{}>", url));
        }

        Struct::new(&ns.type_name)
            .doc(&doc.join("\n"))
            .derive("Debug")
            .derive("Clone")
            .derive("PartialEq")
            .derive("Eq")
            .derive("Hash")
            .field(Field::new("chain", "Chain").private())
    }

    fn type_impl(&self) -> Impl {
        Impl::new(&self.namespace.type_name)
            .constant(
                Const::new("ROOT", "&'static str", format!("{:?}", self.namespace.root))
                    .doc("Expression every new chain starts from."),
            )
            .method(
                Fn::new("new")
                    .doc("Start a chain at [`Self::ROOT`].")
                    .returns("Self")
                    .body_line("Self::with_content(Self::ROOT)"),
            )
            .method(
                Fn::new("with_content")
                    .doc("Start a chain at an arbitrary JavaScript expression.")
                    .param(Param::new("content", "impl Into<String>"))
                    .returns("Self")
                    .body_line("Self::from(Chain::new(content))"),
            )
            .method(
                Fn::new("content")
                    .doc("JavaScript text accumulated so far.")
                    .param(Param::receiver())
                    .returns("&str")
                    .body_line("self.chain.content()"),
            )
            .method(
                Fn::new("into_chain")
                    .param(Param::new("self", ""))
                    .returns("Chain")
                    .body_line("self.chain"),
            )
            .method(
                Fn::new("invoke")
                    .doc("Call the expression itself: `content(args)`.")
                    .param(Param::receiver())
                    .param(Param::new("args", "impl IntoArgs"))
                    .returns("Self")
                    .body_line("Self::from(self.chain.invoke(args, RENDERING))"),
            )
            .method(
                Fn::new("get")
                    .doc("Read a member without calling it: `content.name`.")
                    .param(Param::receiver())
                    .param(Param::new("name", "&str"))
                    .returns("Self")
                    .body_line("Self::from(self.chain.get(name))"),
            )
            .methods(self.namespace.methods.iter().map(|m| self.method(m)))
    }

    fn method(&self, method: &MethodPlan) -> Fn {
        let ret = if method.returns == self.namespace.type_name {
            "Self"
        } else {
            method.returns.as_str()
        };
        let args = if method.has_params() { "args" } else { "()" };
        let chain = match (&method.head, method.is_constant()) {
            (Some(head), true) => format!("Chain::new({:?})", head),
            (Some(head), false) => format!("Chain::new({:?}).invoke({}, RENDERING)", head, args),
            (None, true) => format!("self.chain.get({:?})", method.js_name),
            (None, false) => format!("self.chain.call({:?}, {}, RENDERING)", method.js_name, args),
        };

        let mut f = Fn::new(&method.ident)
            .doc(&method_doc_lines(&method.doc, &method.params).join("\n"))
            .returns(ret)
            .body_line(format!("{}::from({})", ret, chain));
        if method.head.is_none() {
            f = f.param(Param::receiver());
        }
        if method.has_params() {
            f = f.param(Param::new("args", "impl IntoArgs"));
        }
        f
    }

    fn trait_impls(&self) -> Vec<Impl> {
        let type_name = &self.namespace.type_name;
        vec![
            Impl::new(type_name).for_trait("Default").method(
                Fn::new("default")
                    .private()
                    .returns("Self")
                    .body_line("Self::new()"),
            ),
            Impl::new(type_name).for_trait("From<Chain>").method(
                Fn::new("from")
                    .private()
                    .param(Param::new("chain", "Chain"))
                    .returns("Self")
                    .body_line("Self { chain }"),
            ),
        ]
    }
}

impl GeneratedFile for NamespaceRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.rs", self.namespace.file_stem))
    }

    fn render(&self) -> String {
        RustFile::new()
            .use_stmts(self.uses())
            .add(self.rendering())
            .add(self.type_struct())
            .add(self.type_impl())
            .add_all(self.trait_impls())
            .add(RawCode::new(format!(
                "{}::impl_expression!({});",
                self.runtime, self.namespace.type_name
            )))
            .render_with_header(self.header)
    }
}
