//! reStructuredText docstrings from catalog docs.

use detroit_codegen::{DocBlock, parse_doc};

/// Docstring lines for a catalog doc.
///
/// Fenced code becomes a `.. code:: <lang>` directive, with `js` spelled
/// out as `javascript`.
pub fn docstring_lines(doc: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for block in parse_doc(doc) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        match block {
            DocBlock::Paragraph(paragraph) => lines.extend(paragraph),
            DocBlock::Code { lang, lines: code } => {
                let lang = if lang == "js" { "javascript" } else { lang.as_str() };
                lines.push(format!(".. code:: {}", lang));
                lines.push(String::new());
                lines.extend(code.iter().map(|line| {
                    if line.is_empty() {
                        String::new()
                    } else {
                        format!("    {}", line)
                    }
                }));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_directive() {
        let lines = docstring_lines("Draws circles.\n\n```js\nPlot.dot(data)\n\n.plot()\n```");
        assert_eq!(
            lines,
            vec![
                "Draws circles.",
                "",
                ".. code:: javascript",
                "",
                "    Plot.dot(data)",
                "",
                "    .plot()"
            ]
        );
    }

    #[test]
    fn test_other_language_kept() {
        let lines = docstring_lines("```html\n<div></div>\n```");
        assert_eq!(lines[0], ".. code:: html");
    }
}
