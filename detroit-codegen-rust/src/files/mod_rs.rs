use std::path::{Path, PathBuf};

use detroit_codegen::NamespacePlan;
use detroit_core::GeneratedFile;

use crate::{RawCode, RustFile};

/// `{output}/mod.rs` declaring every namespace module and re-exporting its
/// type.
pub struct ModRs<'a> {
    namespaces: &'a [NamespacePlan],
    header: &'a str,
}

impl<'a> ModRs<'a> {
    pub fn new(namespaces: &'a [NamespacePlan], header: &'a str) -> Self {
        Self { namespaces, header }
    }
}

impl GeneratedFile for ModRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("mod.rs")
    }

    fn render(&self) -> String {
        let mods = self
            .namespaces
            .iter()
            .map(|ns| format!("pub mod {};", ns.module))
            .collect::<Vec<_>>();
        let uses = self
            .namespaces
            .iter()
            .map(|ns| format!("pub use {}::{};", ns.module, ns.type_name))
            .collect::<Vec<_>>();

        let mut file = RustFile::new();
        if !mods.is_empty() {
            file = file
                .add(RawCode::new(mods.join("\n")))
                .add(RawCode::new(uses.join("\n")));
        }
        file.render_with_header(self.header)
    }
}
