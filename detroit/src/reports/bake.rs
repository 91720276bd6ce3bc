//! Bake command report.

use std::path::PathBuf;

use super::{
    import::plural,
    output::{Output, Report},
};

#[derive(Debug)]
pub struct BakeReport {
    pub language: String,
    /// Lint warnings, printed before the result
    pub warnings: Vec<String>,
    pub namespaces: usize,
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written under `output_dir`.
    Written {
        output_dir: PathBuf,
        written: Vec<PathBuf>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written {
                output_dir,
                written,
            } => {
                out.preformatted(&format!(
                    "Baked {} namespace{} ({})",
                    self.namespaces,
                    plural(self.namespaces),
                    self.language
                ));
                out.newline();
                out.section(&format!("Generated: {}", output_dir.display()));
                for path in written {
                    let relative = path.strip_prefix(output_dir).unwrap_or(path);
                    out.added_item(&relative.display().to_string());
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} file{} would be generated",
                    files.len(),
                    plural(files.len())
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::StringOutput;

    #[test]
    fn test_render_written() {
        let report = BakeReport {
            language: "rust".to_string(),
            warnings: Vec::new(),
            namespaces: 1,
            result: GenerationResult::Written {
                output_dir: PathBuf::from("src/namespaces"),
                written: vec![
                    PathBuf::from("src/namespaces/plot.rs"),
                    PathBuf::from("src/namespaces/mod.rs"),
                ],
            },
        };

        let mut out = StringOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            "Baked 1 namespace (rust)\n\nGenerated: src/namespaces:\n  + plot.rs\n  + mod.rs\n"
        );
    }

    #[test]
    fn test_render_preview() {
        let report = BakeReport {
            language: "python".to_string(),
            warnings: vec!["method 'dot' has no documentation".to_string()],
            namespaces: 1,
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "plot.py".to_string(),
                content: "class Plot:\n    pass\n".to_string(),
            }]),
        };

        let mut out = StringOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.0,
            "warning: method 'dot' has no documentation\n── plot.py ──\nclass Plot:\n    pass\n\n── Summary ──\n1 file would be generated\n"
        );
    }
}
