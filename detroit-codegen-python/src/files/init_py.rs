use std::path::{Path, PathBuf};

use detroit_codegen::{CodeFragment, NamespacePlan};
use detroit_core::GeneratedFile;

use crate::{Import, PyFile, literal::string_literal};

/// `{output}/__init__.py` importing every namespace class.
pub struct InitPy<'a> {
    namespaces: &'a [NamespacePlan],
    header: &'a str,
}

impl<'a> InitPy<'a> {
    pub fn new(namespaces: &'a [NamespacePlan], header: &'a str) -> Self {
        Self { namespaces, header }
    }
}

impl GeneratedFile for InitPy<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("__init__.py")
    }

    fn render(&self) -> String {
        if self.namespaces.is_empty() {
            return PyFile::new().render_with_header(self.header);
        }

        let all = self
            .namespaces
            .iter()
            .map(|ns| string_literal(&ns.type_name))
            .collect::<Vec<_>>()
            .join(", ");

        PyFile::new()
            .import_group(
                self.namespaces
                    .iter()
                    .map(|ns| Import::new(format!(".{}", ns.module)).name(&ns.type_name)),
            )
            .add(CodeFragment::line(format!("__all__ = [{}]", all)))
            .render_with_header(self.header)
    }
}
