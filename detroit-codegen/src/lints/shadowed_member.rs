//! Lint for methods renamed because they clash with generated members.

use detroit_catalog::Catalog;

use super::{Diagnostic, Lint};
use crate::NamingConvention;

/// Reports methods that `naming` renames because their identifier is one of
/// its reserved members.
pub struct ShadowedMemberLint {
    naming: NamingConvention,
}

impl ShadowedMemberLint {
    pub fn new(naming: &NamingConvention) -> Self {
        Self { naming: *naming }
    }
}

impl Lint for ShadowedMemberLint {
    fn name(&self) -> &'static str {
        "shadowed-member"
    }

    fn description(&self) -> &'static str {
        "Report methods that get a trailing underscore to avoid generated members"
    }

    fn check(&self, catalog: &Catalog, diagnostics: &mut Vec<Diagnostic>) {
        for namespace in &catalog.namespaces {
            for method in &namespace.methods {
                let name = namespace.method_name(method);
                let ident = (self.naming.method_to_name)(name);
                if self.naming.reserved_members.contains(&ident.as_str()) {
                    diagnostics.push(
                        Diagnostic::info(
                            self.name(),
                            format!(
                                "method '{}' is generated as '{}'",
                                name,
                                self.naming.method_name(name)
                            ),
                        )
                        .at(format!("{}.{}", namespace.name, name)),
                    );
                }
            }
        }
    }
}
