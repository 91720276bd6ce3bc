use std::path::{Path, PathBuf};

use detroit_catalog::{Param, ParamKind, Rendering};
use detroit_codegen::{MethodPlan, NamespacePlan};
use detroit_core::GeneratedFile;

use crate::{
    Class, Def, Import, PY_NAMING, PyFile,
    doc::docstring_lines,
    literal::{fstring_text, python_default, string_literal},
};

/// One namespace class: `{output}/{file_stem}.py`.
pub struct NamespacePy<'a> {
    namespace: &'a NamespacePlan,
    header: &'a str,
}

impl<'a> NamespacePy<'a> {
    pub fn new(namespace: &'a NamespacePlan, header: &'a str) -> Self {
        Self { namespace, header }
    }

    /// Python function formatting each present argument.
    fn formatter(&self) -> &'static str {
        match self.namespace.rendering {
            Rendering::Repr => "repr",
            Rendering::Plain => "str",
        }
    }

    fn arguments_line(&self, values: &str) -> String {
        format!(
            "arguments = \", \".join(map({}, filter(partial(is_not, None), {})))",
            self.formatter(),
            values
        )
    }

    fn imports(&self) -> Vec<Import> {
        self.namespace
            .imports
            .iter()
            .map(|import| Import::new(format!(".{}", import.module)).name(&import.type_name))
            .collect()
    }

    fn class(&self) -> Class {
        let ns = self.namespace;
        let mut doc = docstring_lines(&ns.doc);
        if let Some(url) = &ns.url {
            if !doc.is_empty() {
                doc.push(String::new());
            }
            doc.push(format!("See more information: <{}>", url));
        }

        Class::new(&ns.type_name)
            .doc(doc)
            .method(
                Def::new("__init__")
                    .params([
                        "self".to_string(),
                        format!("content: str = {}", string_literal(&ns.root)),
                    ])
                    .body_line("self.content = content"),
            )
            .method(
                Def::new("__repr__")
                    .param("self")
                    .body_line("return self.content"),
            )
            .method(
                Def::new("__str__")
                    .param("self")
                    .body_line("return self.content"),
            )
            .method(
                Def::new("__call__")
                    .params(["self", "*args"])
                    .body_line(self.arguments_line("args"))
                    .body_line(format!(
                        "return {}(f\"{{self.content}}({{arguments}})\")",
                        ns.type_name
                    )),
            )
            .method(
                Def::new("get")
                    .params(["self", "name: str"])
                    .doc(vec![
                        "Read a member without calling it: ``content.name``.".to_string(),
                    ])
                    .body_line(format!(
                        "return {}(f\"{{self.content}}.{{name}}\")",
                        ns.type_name
                    )),
            )
            .methods(ns.methods.iter().map(|m| self.method(m)))
    }

    fn method(&self, method: &MethodPlan) -> Def {
        let names: Vec<(String, &Param)> = method
            .params
            .iter()
            .map(|param| (PY_NAMING.param_name(&param.name), param))
            .collect();

        let mut def = Def::new(&method.ident).doc(docstring_lines(&method.doc));
        match &method.head {
            Some(_) => def = def.decorator("staticmethod"),
            None => def = def.param("self"),
        }
        def = def.params(names.iter().map(|(name, param)| match &param.kind {
            ParamKind::Positional => format!("{}=None", name),
            ParamKind::Default(value) => match python_default(value) {
                Some(value) => format!("{}={}", name, value),
                None => format!("{}=None", name),
            },
            ParamKind::Rest => format!("*{}", name),
        }));

        let callee = match &method.head {
            Some(head) => fstring_text(head),
            None => format!("{{self.content}}.{}", fstring_text(&method.js_name)),
        };

        if method.is_constant() {
            let text = match &method.head {
                Some(head) => string_literal(head),
                None => format!("f\"{}\"", callee),
            };
            return def.body_line(format!("return {}({})", method.returns, text));
        }

        if names.is_empty() {
            let text = match &method.head {
                Some(head) => string_literal(&format!("{}()", head)),
                None => format!("f\"{}()\"", callee),
            };
            return def.body_line(format!("return {}({})", method.returns, text));
        }

        let values = names
            .iter()
            .map(|(name, param)| {
                if param.is_rest() {
                    format!("*{}", name)
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>();
        let tuple = if values.len() == 1 {
            format!("({},)", values[0])
        } else {
            format!("({})", values.join(", "))
        };

        def.body_line(self.arguments_line(&tuple)).body_line(format!(
            "return {}(f\"{}({{arguments}})\")",
            method.returns, callee
        ))
    }
}

impl GeneratedFile for NamespacePy<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.py", self.namespace.file_stem))
    }

    fn render(&self) -> String {
        PyFile::new()
            .import_group([
                Import::new("functools").name("partial"),
                Import::new("operator").name("is_not"),
            ])
            .import_group(self.imports())
            .add(self.class())
            .render_with_header(self.header)
    }
}
