use std::path::Path;

use detroit_catalog::Catalog;
use detroit_codegen::{GenerationPlan, LanguageCodegen};
use detroit_core::{File, GeneratedFile};
use eyre::Result;

use crate::{
    PY_NAMING,
    files::{InitPy, NamespacePy},
};

/// Python code generator: one module per namespace plus an `__init__.py`.
#[derive(Debug)]
pub struct Generator {
    plan: GenerationPlan,
    header: String,
}

impl Generator {
    pub fn new(catalog: &Catalog) -> Result<Self> {
        Ok(Self {
            plan: GenerationPlan::new(catalog, &PY_NAMING)?,
            header: catalog.generator.header.clone(),
        })
    }

    pub fn plan(&self) -> &GenerationPlan {
        &self.plan
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn files(&self, output_dir: &Path) -> Vec<File> {
        let mut files = Vec::with_capacity(self.plan.namespaces.len() + 1);
        for namespace in &self.plan.namespaces {
            tracing::debug!(
                namespace = %namespace.name,
                file = %namespace.file_stem,
                "rendering python module"
            );
            files.push(NamespacePy::new(namespace, &self.header).to_file(output_dir));
        }
        files.push(InitPy::new(&self.plan.namespaces, &self.header).to_file(output_dir));
        files
    }
}
