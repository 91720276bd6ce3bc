//! Check command report.

use std::path::PathBuf;

use super::{
    import::plural,
    output::{Output, Report},
};

#[derive(Debug)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub language: String,
    pub namespaces: Vec<(String, usize)>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.is_valid() {
            return;
        }
        if !self.warnings.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        out.preformatted(&format!(
            "✓ {} is valid ({})",
            self.config_path.display(),
            self.language
        ));
        out.newline();
        out.section(&format!(
            "{} namespace{}",
            self.namespaces.len(),
            plural(self.namespaces.len())
        ));
        for (name, methods) in &self.namespaces {
            out.list_item(&format!("{} ({} method{})", name, methods, plural(*methods)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::StringOutput;

    fn report() -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("detroit.toml"),
            language: "rust".to_string(),
            namespaces: vec![("Plot".to_string(), 2), ("Axis".to_string(), 1)],
            errors: Vec::new(),
            warnings: vec!["namespace 'Axis' has no documentation".to_string()],
            infos: Vec::new(),
        }
    }

    #[test]
    fn test_render_valid() {
        let mut out = StringOutput::default();
        report().render(&mut out);
        assert_eq!(
            out.0,
            "warning: namespace 'Axis' has no documentation\n\n✓ detroit.toml is valid (rust)\n\n2 namespaces:\n  - Plot (2 methods)\n  - Axis (1 method)\n"
        );
    }

    #[test]
    fn test_render_errors_only() {
        let mut report = report();
        report.warnings.clear();
        report.errors.push("methods 'areaX' and 'area_x' both generate 'area_x'".to_string());

        let mut out = StringOutput::default();
        report.render(&mut out);
        assert!(!report.is_valid());
        assert_eq!(
            out.0,
            "error: methods 'areaX' and 'area_x' both generate 'area_x'\n"
        );
    }
}
