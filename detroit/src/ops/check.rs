//! Check operation: lints and naming.

use std::path::Path;

use detroit_catalog::Catalog;
use detroit_codegen::{GenerationPlan, Severity, run_lints};

use crate::{language::LanguageSupport, reports::CheckReport};

/// Lint a validated catalog and resolve its identifiers for `lang`.
pub fn check(catalog: &Catalog, config_path: &Path, lang: &LanguageSupport) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in run_lints(catalog, lang.naming()) {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    if let Err(err) = GenerationPlan::new(catalog, lang.naming()) {
        errors.push(err.to_string());
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        language: lang.language().to_string(),
        namespaces: catalog
            .namespaces
            .iter()
            .map(|ns| (ns.name.clone(), ns.methods.len()))
            .collect(),
        errors,
        warnings,
        infos,
    }
}

#[cfg(test)]
mod tests {
    use detroit_catalog::Language;

    use super::*;
    use crate::ops::PLOT;

    #[test]
    fn test_check_reports_lints() {
        let catalog: Catalog = PLOT.parse().unwrap();
        let report = check(
            &catalog,
            Path::new("detroit.toml"),
            &LanguageSupport::get(Language::Rust),
        );

        assert!(report.is_valid());
        assert_eq!(
            report.namespaces,
            vec![("Plot".to_string(), 2), ("Axis".to_string(), 1)]
        );
        assert!(!report.warnings.is_empty());
    }

    #[test]
    fn test_shadowed_members_follow_language() {
        let catalog: Catalog = PLOT.parse().unwrap();
        let path = Path::new("detroit.toml");

        let rust = check(&catalog, path, &LanguageSupport::get(Language::Rust));
        assert_eq!(rust.infos.len(), 1);
        assert!(rust.infos[0].starts_with("method 'from' is generated as 'from_'"));

        let python = check(&catalog, path, &LanguageSupport::get(Language::Python));
        assert!(python.infos.is_empty());
    }

    #[test]
    fn test_check_reports_collisions() {
        let catalog: Catalog = r#"
[[namespaces]]
name = "Plot"

[[namespaces.methods]]
name = "areaX"

[[namespaces.methods]]
name = "area_x"
"#
        .parse()
        .unwrap();

        let rust = check(
            &catalog,
            Path::new("detroit.toml"),
            &LanguageSupport::get(Language::Rust),
        );
        assert!(!rust.is_valid());
        assert!(rust.errors.iter().any(|e| e.contains("both generate 'area_x'")));

        let python = check(
            &catalog,
            Path::new("detroit.toml"),
            &LanguageSupport::get(Language::Python),
        );
        assert!(python.is_valid());
    }
}
