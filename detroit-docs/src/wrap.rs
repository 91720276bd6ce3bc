//! Documentation text assembly.

use crate::Block;

/// Maximum width of a wrapped paragraph line.
pub const WRAP_WIDTH: usize = 88;

/// Soft-wrap a paragraph on word boundaries.
///
/// Whitespace runs collapse to single spaces; a word longer than `width`
/// gets a line of its own and is never split.
pub fn wrap_paragraph(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();
        if line.is_empty() {
            line.push_str(word);
            line_width = word_width;
        } else if line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_width = word_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Build a Markdown doc from page blocks.
///
/// Paragraphs (and secondary headings) are wrapped, code becomes a ```` ```js ````
/// fence, blocks are separated by a blank line, and the page URL closes the
/// doc as `See more information: <url>`.
pub fn assemble_doc<'a>(blocks: impl IntoIterator<Item = &'a Block>, url: Option<&str>) -> String {
    let mut parts: Vec<String> = blocks
        .into_iter()
        .filter_map(|block| match block {
            Block::Heading(text) | Block::Paragraph(text) => {
                let lines = wrap_paragraph(text, WRAP_WIDTH);
                (!lines.is_empty()).then(|| lines.join("\n"))
            }
            Block::Code(lines) => Some(format!("```js\n{}\n```", lines.join("\n"))),
        })
        .collect();

    if let Some(url) = url {
        parts.push(see_more(url));
    }
    parts.join("\n\n")
}

pub fn see_more(url: &str) -> String {
    format!("See more information: <{}>", url)
}
