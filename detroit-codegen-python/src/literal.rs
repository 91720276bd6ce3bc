//! Python string literals.

/// A double-quoted Python string literal.
pub fn string_literal(text: &str) -> String {
    format!("\"{}\"", escape(text))
}

/// Text placed inside a double-quoted f-string, braces doubled.
pub fn fstring_text(text: &str) -> String {
    escape(text).replace('{', "{{").replace('}', "}}")
}

/// A JavaScript default value as Python source, when it is a plain literal.
///
/// Numbers and quoted strings are kept, `true`/`false`/`null` are
/// translated; anything else (objects, expressions) has no Python
/// equivalent.
pub fn python_default(value: &str) -> Option<String> {
    let value = value.trim();
    match value {
        "true" => return Some("True".to_string()),
        "false" => return Some("False".to_string()),
        "null" | "undefined" => return Some("None".to_string()),
        _ => {}
    }
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    let numeric = value.parse::<f64>().is_ok() && !value.contains(char::is_alphabetic);
    (quoted || numeric).then(|| value.to_string())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal() {
        assert_eq!(string_literal("d3.scaleLinear()"), "\"d3.scaleLinear()\"");
        assert_eq!(string_literal("a\"b\\"), "\"a\\\"b\\\\\"");
    }

    #[test]
    fn test_python_default() {
        assert_eq!(python_default("10").as_deref(), Some("10"));
        assert_eq!(python_default("0.5").as_deref(), Some("0.5"));
        assert_eq!(python_default("\"linear\"").as_deref(), Some("\"linear\""));
        assert_eq!(python_default("true").as_deref(), Some("True"));
        assert_eq!(python_default("{x: 1}"), None);
        assert_eq!(python_default("Infinity"), None);
        assert_eq!(python_default("d3.identity"), None);
    }

    #[test]
    fn test_fstring_text() {
        assert_eq!(fstring_text("d3.x({})"), "d3.x({{}})");
    }
}
