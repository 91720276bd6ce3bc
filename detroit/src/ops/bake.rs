//! Bake operation: code generation from a catalog.

use std::path::Path;

use detroit_catalog::Catalog;
use detroit_codegen::{Severity, run_lints};
use eyre::{Context, Result};

use crate::{
    language::LanguageSupport,
    reports::{BakeReport, GenerationResult, PreviewFile},
};

pub struct BakeOptions<'a> {
    pub output_dir: &'a Path,
    /// Render without writing files
    pub dry_run: bool,
}

/// Generate the namespace files of `catalog` for `lang`.
///
/// Every file is rendered before the first write, so a naming collision
/// leaves the output directory untouched.
pub fn bake(catalog: &Catalog, lang: &LanguageSupport, opts: BakeOptions) -> Result<BakeReport> {
    let warnings = run_lints(catalog, lang.naming())
        .into_iter()
        .filter(|diag| diag.severity == Severity::Warning)
        .map(|diag| diag.message)
        .collect();

    let generator = lang.generator(catalog)?;
    let result = if opts.dry_run {
        GenerationResult::Preview(
            generator
                .preview()
                .into_iter()
                .map(|file| PreviewFile {
                    path: file.path,
                    content: file.content,
                })
                .collect(),
        )
    } else {
        let generated = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written {
            output_dir: opts.output_dir.to_path_buf(),
            written: generated.written,
        }
    };

    Ok(BakeReport {
        language: lang.language().to_string(),
        warnings,
        namespaces: catalog.namespaces.len(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use detroit_catalog::Language;

    use super::*;
    use crate::ops::PLOT;

    #[test]
    fn test_bake_writes_rust_files() {
        let dir = tempfile::tempdir().unwrap();
        let catalog: Catalog = PLOT.parse().unwrap();

        let report = bake(
            &catalog,
            &LanguageSupport::get(Language::Rust),
            BakeOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap();

        let GenerationResult::Written { written, .. } = &report.result else {
            panic!("expected written files");
        };
        assert_eq!(
            written,
            &vec![
                dir.path().join("plot.rs"),
                dir.path().join("axis.rs"),
                dir.path().join("mod.rs"),
            ]
        );
        let plot = std::fs::read_to_string(dir.path().join("plot.rs")).unwrap();
        assert!(plot.contains("pub fn from_(&self) -> Axis {"));
        assert!(plot.contains("Axis::from(self.chain.call(\"from\", (), RENDERING))"));
        assert!(!report.warnings.is_empty());
    }

    #[test]
    fn test_bake_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let catalog: Catalog = PLOT.parse().unwrap();

        let report = bake(
            &catalog,
            &LanguageSupport::get(Language::Python),
            BakeOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(files) = &report.result else {
            panic!("expected a preview");
        };
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["plot.py", "axis.py", "__init__.py"]);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_bake_collision_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
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

        let result = bake(
            &catalog,
            &LanguageSupport::get(Language::Rust),
            BakeOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        );
        assert!(result.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
