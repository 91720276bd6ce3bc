//! Unified language dispatch.

use detroit_catalog::{Catalog, Language};
use detroit_codegen::{LanguageCodegen, NamingConvention};
use detroit_codegen_python::{Generator as PythonGenerator, PY_NAMING};
use detroit_codegen_rust::{Generator as RustGenerator, RUST_NAMING};
use eyre::Result;

/// Language-specific support for code generation.
pub struct LanguageSupport {
    language: Language,
    /// Output directory used when `--output` is not given
    pub default_output: &'static str,
}

impl LanguageSupport {
    pub fn get(language: Language) -> Self {
        match language {
            Language::Rust => Self {
                language,
                default_output: "src/namespaces",
            },
            Language::Python => Self {
                language,
                default_output: "namespaces",
            },
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn naming(&self) -> &'static NamingConvention {
        match self.language {
            Language::Rust => &RUST_NAMING,
            Language::Python => &PY_NAMING,
        }
    }

    /// Create a generator for this language.
    ///
    /// Fails when the naming convention makes two identifiers collide.
    pub fn generator(&self, catalog: &Catalog) -> Result<Box<dyn LanguageCodegen>> {
        Ok(match self.language {
            Language::Rust => Box::new(RustGenerator::new(catalog)?),
            Language::Python => Box::new(PythonGenerator::new(catalog)?),
        })
    }
}
