//! Catalog lints.
//!
//! Lints report problems that do not prevent generation, such as missing
//! documentation. Hard errors are caught earlier by catalog validation.

mod diagnostic;
mod empty_doc;
mod empty_namespace;
mod shadowed_member;

use detroit_catalog::Catalog;
pub use diagnostic::{Diagnostic, Severity};
pub use empty_doc::EmptyDocLint;
pub use empty_namespace::EmptyNamespaceLint;
pub use shadowed_member::ShadowedMemberLint;

use crate::NamingConvention;

/// A lint that checks the catalog for issues.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, catalog: &Catalog, diagnostics: &mut Vec<Diagnostic>);
}

/// The lints `detroit check` runs for a target naming convention.
pub fn default_lints(naming: &NamingConvention) -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(EmptyNamespaceLint),
        Box::new(EmptyDocLint),
        Box::new(ShadowedMemberLint::new(naming)),
    ]
}

/// Run every default lint against `catalog`.
pub fn run_lints(catalog: &Catalog, naming: &NamingConvention) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in default_lints(naming) {
        tracing::debug!(lint = lint.name(), "running lint");
        lint.check(catalog, &mut diagnostics);
    }
    diagnostics
}
