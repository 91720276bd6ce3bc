//! API signature parsing.

use std::collections::HashSet;

use detroit_catalog::Param;
use detroit_core::is_identifier;

/// A parsed API heading such as `d3.scaleLinear(domain, range)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Text before the parameter list, e.g. `d3.scaleLinear`
    pub head: String,
    pub params: Vec<Param>,
    /// False for headings without a parameter list, e.g. `d3.schemeCategory10`
    pub parenthesized: bool,
}

/// Parse a heading into a head and parameter specs.
///
/// Zero-width spaces, version badges (`^0.6.1`) and `[k]` accessor markers
/// are dropped. Parameters that are not plain identifiers (destructuring,
/// duplicates, a rest parameter before the last position) are renamed
/// `arg{n}` after their position, or the next free `arg{n}` when that name is
/// taken. A heading without parentheses has no parameters.
pub fn parse_signature(heading: &str) -> Signature {
    let cleaned = heading.replace('\u{200b}', "").replace("[k]", "");
    let cleaned = cleaned
        .split_whitespace()
        .filter(|token| !token.starts_with('^'))
        .collect::<Vec<_>>()
        .join(" ");

    let Some(open) = cleaned.find('(') else {
        return Signature {
            head: cleaned,
            params: Vec::new(),
            parenthesized: false,
        };
    };

    let head = cleaned[..open].trim().to_string();
    let rest = &cleaned[open + 1..];
    let inner = match rest.rfind(')') {
        Some(close) => &rest[..close],
        None => rest,
    };

    let tokens = split_top_level(inner);
    let count = tokens.len();
    let mut seen = HashSet::new();
    let params = tokens
        .iter()
        .enumerate()
        .map(|(n, token)| {
            let param = parse_param(token, n + 1 == count)
                .filter(|param| !seen.contains(&param.name))
                .unwrap_or_else(|| Param::positional(fallback_name(n, &seen)));
            seen.insert(param.name.clone());
            param
        })
        .collect();

    Signature {
        head,
        params,
        parenthesized: true,
    }
}

/// `arg{n}`, bumping `n` past names already in use.
fn fallback_name(mut n: usize, seen: &HashSet<String>) -> String {
    loop {
        let name = format!("arg{}", n);
        if !seen.contains(&name) {
            return name;
        }
        n += 1;
    }
}

/// A parameter spec, or `None` when the token is not a usable name.
fn parse_param(token: &str, is_last: bool) -> Option<Param> {
    if let Some(name) = token.strip_prefix("...") {
        let name = name.trim();
        (is_identifier(name) && is_last).then(|| Param::rest(name))
    } else if let Some((name, value)) = token.split_once('=') {
        let (name, value) = (name.trim(), value.trim());
        (is_identifier(name) && !value.is_empty()).then(|| Param::with_default(name, value))
    } else {
        is_identifier(token).then(|| Param::positional(token))
    }
}

/// Split on commas outside of brackets, braces and parentheses.
fn split_top_level(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for c in text.chars() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                tokens.push(std::mem::take(&mut current).trim().to_string());
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    let last = current.trim();
    if !last.is_empty() || !tokens.is_empty() {
        tokens.push(last.to_string());
    }
    tokens.retain(|token| !token.is_empty());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(signature: &Signature) -> Vec<String> {
        signature.params.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_simple_signature() {
        let signature = parse_signature("d3.scaleLinear(domain, range)");
        assert_eq!(signature.head, "d3.scaleLinear");
        assert_eq!(names(&signature), vec!["domain", "range"]);
    }

    #[test]
    fn test_rest_and_default() {
        let signature = parse_signature("linear.ticks(count = 10)");
        assert_eq!(names(&signature), vec!["count = 10"]);

        let signature = parse_signature("d3.merge(...iterables)");
        assert_eq!(names(&signature), vec!["...iterables"]);
    }

    #[test]
    fn test_noise_is_stripped() {
        let signature = parse_signature("\u{200b}d3.blur2(data, rx, ry) ^3.1.0");
        assert_eq!(signature.head, "d3.blur2");
        assert_eq!(names(&signature), vec!["data", "rx", "ry"]);

        let signature = parse_signature("map.get[k](key)");
        assert_eq!(signature.head, "map.get");
        assert_eq!(names(&signature), vec!["key"]);
    }

    #[test]
    fn test_destructured_params_are_renamed() {
        let signature = parse_signature("d3.blur2({data, width, height}, rx, ry)");
        assert_eq!(names(&signature), vec!["arg0", "rx", "ry"]);

        let signature = parse_signature("d3.cross(...iterables, reducer)");
        assert_eq!(names(&signature), vec!["arg0", "reducer"]);

        let signature = parse_signature("d3.f(a, a)");
        assert_eq!(names(&signature), vec!["a", "arg1"]);
    }

    #[test]
    fn test_renamed_params_stay_unique() {
        let signature = parse_signature("f(arg1, {x})");
        assert_eq!(names(&signature), vec!["arg1", "arg2"]);

        let signature = parse_signature("f({x}, arg0, [y])");
        assert_eq!(names(&signature), vec!["arg0", "arg1", "arg2"]);
    }

    #[test]
    fn test_without_parentheses() {
        let signature = parse_signature("d3.schemeCategory10");
        assert_eq!(signature.head, "d3.schemeCategory10");
        assert!(signature.params.is_empty());
        assert!(!signature.parenthesized);

        let signature = parse_signature("Plot.plot()");
        assert!(signature.params.is_empty());
        assert!(signature.parenthesized);
    }

    #[test]
    fn test_nested_defaults() {
        let signature = parse_signature("Plot.dot(data, options = {x: 1, y: 2})");
        assert_eq!(names(&signature), vec!["data", "options = {x: 1, y: 2}"]);
    }
}
