//! Lint for methods without documentation.

use detroit_catalog::Catalog;

use super::{Diagnostic, Lint};

pub struct EmptyDocLint;

impl Lint for EmptyDocLint {
    fn name(&self) -> &'static str {
        "empty-doc"
    }

    fn description(&self) -> &'static str {
        "Warn about methods without documentation"
    }

    fn check(&self, catalog: &Catalog, diagnostics: &mut Vec<Diagnostic>) {
        for namespace in &catalog.namespaces {
            for method in &namespace.methods {
                if method.doc.trim().is_empty() {
                    let name = namespace.method_name(method);
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!("method '{}' has no documentation", name),
                        )
                        .at(format!("{}.{}", namespace.name, name)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> Catalog {
        src.parse().expect("Failed to parse test catalog")
    }

    #[test]
    fn test_empty_doc() {
        let catalog = parse(
            r#"
            [[namespaces]]
            name = "d3"
            kind = "static"

            [[namespaces.methods]]
            name = "d3.line"

            [[namespaces.methods]]
            name = "d3.area"
            doc = "Constructs a new area generator."
        "#,
        );

        let mut diagnostics = Vec::new();
        EmptyDocLint.check(&catalog, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("d3.line"));
        assert!(diagnostics[0].severity.is_warning());
    }
}
