//! Target-neutral documentation.
//!
//! Descriptor docs are Markdown restricted to paragraphs and fenced code
//! blocks. Backends split them into [`DocBlock`]s and render each block in
//! their own comment syntax.

/// One block of a descriptor's documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocBlock {
    /// Consecutive text lines, already wrapped.
    Paragraph(Vec<String>),
    /// A fenced code block with its language tag (`js` when unspecified).
    Code { lang: String, lines: Vec<String> },
}

/// Split Markdown documentation into paragraphs and code blocks.
///
/// An unterminated fence runs to the end of the text.
pub fn parse_doc(doc: &str) -> Vec<DocBlock> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut code: Option<(String, Vec<String>)> = None;

    for line in doc.lines() {
        if let Some((lang, lines)) = code.as_mut() {
            if line.trim_start().starts_with("```") {
                blocks.push(DocBlock::Code {
                    lang: std::mem::take(lang),
                    lines: std::mem::take(lines),
                });
                code = None;
            } else {
                lines.push(line.to_string());
            }
            continue;
        }

        if let Some(tag) = line.trim_start().strip_prefix("```") {
            flush_paragraph(&mut paragraph, &mut blocks);
            let lang = match tag.trim() {
                "" => "js".to_string(),
                tag => tag.to_string(),
            };
            code = Some((lang, Vec::new()));
        } else if line.trim().is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
        } else {
            paragraph.push(line.trim_end().to_string());
        }
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    if let Some((lang, lines)) = code {
        blocks.push(DocBlock::Code { lang, lines });
    }
    blocks
}

fn flush_paragraph(paragraph: &mut Vec<String>, blocks: &mut Vec<DocBlock>) {
    if !paragraph.is_empty() {
        blocks.push(DocBlock::Paragraph(std::mem::take(paragraph)));
    }
}

/// First paragraph line of a doc, used as a one-line summary.
pub fn summary(doc: &str) -> Option<String> {
    parse_doc(doc).into_iter().find_map(|block| match block {
        DocBlock::Paragraph(lines) => lines.into_iter().next(),
        DocBlock::Code { .. } => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_code() {
        let doc = "Draws circles.\nOne per datum.\n\n```js\nPlot.dot(data).plot()\n```\n\nSee more information: https://observablehq.com/plot/marks/dot";
        let blocks = parse_doc(doc);
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[0],
            DocBlock::Paragraph(vec!["Draws circles.".into(), "One per datum.".into()])
        );
        assert_eq!(
            blocks[1],
            DocBlock::Code {
                lang: "js".into(),
                lines: vec!["Plot.dot(data).plot()".into()],
            }
        );
    }

    #[test]
    fn test_code_keeps_blank_lines_and_indentation() {
        let doc = "```\nconst x = 1;\n\n  x + 1;\n```";
        assert_eq!(
            parse_doc(doc),
            vec![DocBlock::Code {
                lang: "js".into(),
                lines: vec!["const x = 1;".into(), "".into(), "  x + 1;".into()],
            }]
        );
    }

    #[test]
    fn test_unterminated_fence() {
        let blocks = parse_doc("Text\n```js\nd3.line()");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary("```js\nx\n```\nFirst line\nsecond"), Some("First line".into()));
        assert_eq!(summary(""), None);
    }
}
