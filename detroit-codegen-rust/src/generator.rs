use std::path::Path;

use detroit_catalog::Catalog;
use detroit_codegen::{GenerationPlan, LanguageCodegen};
use detroit_core::{File, GeneratedFile};
use eyre::Result;

use crate::{
    RUST_NAMING,
    files::{ModRs, NamespaceRs},
};

/// Rust code generator: one module per namespace plus a `mod.rs`.
#[derive(Debug)]
pub struct Generator {
    plan: GenerationPlan,
    header: String,
    runtime: String,
}

impl Generator {
    /// Resolve Rust identifiers for a validated catalog.
    ///
    /// Fails when two namespaces or two methods end up with the same
    /// identifier once converted to Rust naming.
    pub fn new(catalog: &Catalog) -> Result<Self> {
        Ok(Self {
            plan: GenerationPlan::new(catalog, &RUST_NAMING)?,
            header: catalog.generator.header.clone(),
            runtime: catalog.generator.runtime.clone(),
        })
    }

    pub fn plan(&self) -> &GenerationPlan {
        &self.plan
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn files(&self, output_dir: &Path) -> Vec<File> {
        let mut files: Vec<File> = self
            .plan
            .namespaces
            .iter()
            .map(|namespace| {
                tracing::debug!(
                    namespace = %namespace.name,
                    file = %namespace.file_stem,
                    "rendering rust module"
                );
                NamespaceRs::new(namespace, &self.header, &self.runtime).to_file(output_dir)
            })
            .collect();
        files.push(ModRs::new(&self.plan.namespaces, &self.header).to_file(output_dir));
        files
    }
}
