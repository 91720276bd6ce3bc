//! Markdown rendering of catalog docs for `///` comments.

use detroit_catalog::Param;
use detroit_codegen::{DocBlock, parse_doc};

/// Turn a catalog doc into doc comment lines.
///
/// Paragraph lines are left-trimmed so rustdoc never reads them as indented
/// code, and every fence carries its language tag so JavaScript examples are
/// not compiled as doctests.
pub fn doc_lines(doc: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for block in parse_doc(doc) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        match block {
            DocBlock::Paragraph(paragraph) => {
                lines.extend(paragraph.iter().map(|line| line.trim_start().to_string()));
            }
            DocBlock::Code { lang, lines: code } => {
                lines.push(format!("```{}", lang));
                lines.extend(code);
                lines.push("```".to_string());
            }
        }
    }
    lines
}

/// Doc lines of a generated method: its doc followed by the parameter list.
pub fn method_doc_lines(doc: &str, params: &[Param]) -> Vec<String> {
    let mut lines = doc_lines(doc);
    if !params.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        let names = params
            .iter()
            .map(|param| format!("`{}`", param))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("Arguments: {}", names));
    }
    lines
}
