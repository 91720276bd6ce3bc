//! Catalog validation with source spans.

use std::collections::{HashMap, HashSet};

use detroit_core::is_identifier;
use miette::SourceSpan;

use crate::{Catalog, Error, Method, Namespace, Result, error::SourceContext};

/// Validation context that carries source information and the current path
/// through the catalog.
///
/// ```ignore
/// let ctx = ParseContext::new(src, "detroit.toml");
/// let nested = ctx.push("d3");
/// assert_eq!(nested.context_for("method"), "method in 'd3'");
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self {
            src,
            filename,
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            src: self.src,
            filename: self.filename,
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe an item for error messages, e.g. "method in 'd3'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    pub fn source(&self) -> SourceContext {
        SourceContext::new(self.src, self.filename)
    }

    /// Find the span of the `n`th `key = "value"` pair in the source.
    pub fn find_span(&self, key: &str, value: &str, n: usize) -> Option<SourceSpan> {
        find_value_span(self.src, key, value, n)
    }

    pub fn missing_name_error(&self, kind: &str, span: Option<SourceSpan>) -> Box<Error> {
        self.source().missing_name_error(self.context_for(kind), span)
    }

    /// Validate that a name is a usable identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source().invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span("name", name, 0),
            ));
        }
        Ok(())
    }
}

/// Find the span of the `n`th (0-based) occurrence of `key = "value"`.
///
/// The span covers the value without its quotes. Falls back to the `n`th
/// quoted occurrence of the value anywhere in the source.
pub fn find_value_span(src: &str, key: &str, value: &str, n: usize) -> Option<SourceSpan> {
    let patterns = [
        (format!("{} = \"{}\"", key, value), key.len() + 4),
        (format!("{}=\"{}\"", key, value), key.len() + 2),
        (format!("\"{}\"", value), 1),
    ];

    for (pattern, offset) in &patterns {
        if let Some(pos) = nth_match(src, pattern, n) {
            return Some(SourceSpan::from((pos + offset, value.len())));
        }
    }
    None
}

/// Find the span of the `n`th (0-based) `[[header]]` line.
pub fn find_table_span(src: &str, header: &str, n: usize) -> Option<SourceSpan> {
    let pattern = format!("[[{}]]", header);
    nth_match(src, &pattern, n).map(|pos| SourceSpan::from((pos, pattern.len())))
}

fn nth_match(src: &str, pattern: &str, n: usize) -> Option<usize> {
    src.match_indices(pattern).nth(n).map(|(pos, _)| pos)
}

/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => Some("name cannot be empty"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            Some("name must start with a letter or underscore")
        }
        _ if !is_identifier(name) => {
            Some("name must contain only letters, numbers, and underscores")
        }
        _ => None,
    }
}

/// Validate a parsed catalog against its source.
pub(crate) fn validate_catalog(catalog: &Catalog, ctx: &ParseContext<'_>) -> Result<()> {
    validate_runtime(&catalog.generator.runtime, ctx)?;

    let names: Vec<&str> = catalog.namespaces.iter().map(|ns| ns.name.as_str()).collect();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut method_offset = 0;

    for (index, namespace) in catalog.namespaces.iter().enumerate() {
        if namespace.name.trim().is_empty() {
            let span = find_table_span(ctx.src(), "namespaces", index);
            return Err(ctx.missing_name_error("namespace", span));
        }
        ctx.validate_name(&namespace.name, "namespace")?;

        let occurrence = seen.entry(namespace.name.as_str()).or_insert(0);
        *occurrence += 1;
        if *occurrence > 1 {
            return Err(ctx.source().duplicate_namespace_error(
                &namespace.name,
                ctx.find_span("name", &namespace.name, 0),
                ctx.find_span("name", &namespace.name, *occurrence - 1),
            ));
        }

        if namespace.root().trim().is_empty() {
            return Err(ctx.source().validation_error(
                format!("namespace '{}' has an empty root", namespace.name),
                ctx.find_span("root", "", 0),
            ));
        }

        let ns_ctx = ctx.push(&namespace.name);
        validate_methods(namespace, &names, method_offset, &ns_ctx)?;
        method_offset += namespace.methods.len();
    }

    Ok(())
}

fn validate_runtime(runtime: &str, ctx: &ParseContext<'_>) -> Result<()> {
    let valid = runtime
        .split("::")
        .all(|segment| validate_identifier(segment).is_none());
    if !valid {
        return Err(ctx.source().validation_error(
            format!("runtime '{}' is not a valid crate path", runtime),
            ctx.find_span("runtime", runtime, 0),
        ));
    }
    Ok(())
}

fn validate_methods(
    namespace: &Namespace,
    namespaces: &[&str],
    method_offset: usize,
    ctx: &ParseContext<'_>,
) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (index, method) in namespace.methods.iter().enumerate() {
        if method.name.trim().is_empty() {
            let span = find_table_span(ctx.src(), "namespaces.methods", method_offset + index);
            return Err(ctx.missing_name_error("method", span));
        }

        let js_name = namespace.method_name(method);
        ctx.validate_name(js_name, "method")
            .map_err(|_| invalid_method_name(namespace, method, ctx))?;

        if let Some(first) = seen.insert(js_name, &method.name) {
            return Err(ctx.source().duplicate_method_error(
                js_name,
                &namespace.name,
                ctx.find_span("name", first, 0),
                ctx.find_span("name", &method.name, usize::from(first == method.name)),
            ));
        }

        if let Some(target) = &method.returns {
            if !namespaces.contains(&target.as_str()) {
                return Err(ctx.source().unknown_return_error(
                    target,
                    &method.name,
                    namespaces,
                    ctx.find_span("returns", target, 0),
                ));
            }
        }

        if method.is_constant() {
            validate_constant(method, ctx)?;
        }
        validate_params(method, ctx)?;
    }

    Ok(())
}

fn validate_constant(method: &Method, ctx: &ParseContext<'_>) -> Result<()> {
    let reason = if method.has_params() {
        "takes parameters"
    } else if method.name.starts_with("new ") {
        "is a constructor"
    } else {
        return Ok(());
    };
    Err(ctx.source().validation_error(
        format!("constant '{}' {}", method.name, reason),
        ctx.find_span("name", &method.name, 0),
    ))
}

fn invalid_method_name(namespace: &Namespace, method: &Method, ctx: &ParseContext<'_>) -> Box<Error> {
    let reason = if namespace.is_static() {
        format!(
            "the head must be an identifier, optionally prefixed by 'new ' or '{}.'",
            namespace.root()
        )
    } else {
        "a chained method name must be an identifier".to_string()
    };
    ctx.source().invalid_identifier_error(
        &method.name,
        ctx.context_for("method"),
        reason,
        ctx.find_span("name", &method.name, 0),
    )
}

fn validate_params(method: &Method, ctx: &ParseContext<'_>) -> Result<()> {
    let mut names = HashSet::new();
    let last = method.params.len().saturating_sub(1);

    for (index, param) in method.params.iter().enumerate() {
        let reason = if !names.insert(param.name.as_str()) {
            Some("parameter names must be unique")
        } else if param.is_rest() && index != last {
            Some("a rest parameter must be the last parameter")
        } else {
            None
        };

        if let Some(reason) = reason {
            let text = param.to_string();
            let span = ctx
                .src()
                .find(&format!("\"{}\"", text))
                .map(|pos| SourceSpan::from((pos + 1, text.len())));
            return Err(ctx
                .source()
                .invalid_param_error(text, &method.name, reason, span));
        }
    }
    Ok(())
}
