use detroit_catalog::Catalog;

use super::{Diagnostic, Lint};

/// Lint for namespaces that generate a type without methods.
pub struct EmptyNamespaceLint;

impl Lint for EmptyNamespaceLint {
    fn name(&self) -> &'static str {
        "empty-namespace"
    }

    fn description(&self) -> &'static str {
        "Warn about namespaces without methods"
    }

    fn check(&self, catalog: &Catalog, diagnostics: &mut Vec<Diagnostic>) {
        for namespace in catalog.namespaces.iter().filter(|ns| ns.methods.is_empty()) {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!("namespace '{}' has no methods", namespace.name),
                )
                .at(&namespace.name),
            );
        }
    }
}
