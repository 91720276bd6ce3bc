//! Import command report.

use std::path::PathBuf;

use detroit_docs::Skipped;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct ImportReport {
    /// Scraped records read
    pub records: usize,
    pub namespaces: usize,
    pub methods: usize,
    pub skipped: Vec<Skipped>,
    /// Catalog written, `None` on a dry run
    pub output: Option<PathBuf>,
}

impl Report for ImportReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.skipped.is_empty() {
            out.section(&format!("Skipped records ({})", self.skipped.len()));
            for skipped in &self.skipped {
                out.list_item(&format!("{}: {}", skipped.name, skipped.reason));
            }
            out.newline();
        }

        out.preformatted(&format!(
            "{} records → {} namespace{}, {} method{}",
            self.records,
            self.namespaces,
            plural(self.namespaces),
            self.methods,
            plural(self.methods),
        ));
        if let Some(output) = &self.output {
            out.key_value("Written", &output.display().to_string());
        }
    }
}

pub(super) fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
