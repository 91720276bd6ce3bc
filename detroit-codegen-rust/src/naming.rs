//! Rust-specific naming conventions.

use detroit_codegen::NamingConvention;
use detroit_core::{to_pascal_case, to_snake_case};

/// Keywords that cannot be written as raw identifiers.
const NOT_RAW: &[&str] = &["self", "Self", "super", "crate"];

fn escape_rust_reserved(name: &str) -> String {
    if NOT_RAW.contains(&name) {
        format!("{}_", name)
    } else {
        format!("r#{}", name)
    }
}

/// Rust naming conventions.
///
/// Types are PascalCase, modules and methods snake_case. Keywords become raw
/// identifiers (`r#type`).
pub const RUST_NAMING: NamingConvention = NamingConvention {
    namespace_to_type: to_pascal_case,
    namespace_to_module: to_snake_case,
    method_to_name: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
    reserved_members: &[
        "content",
        "from",
        "get",
        "into_chain",
        "invoke",
        "new",
        "with_content",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_naming_type() {
        assert_eq!(RUST_NAMING.type_name("Plot"), "Plot");
        assert_eq!(RUST_NAMING.type_name("scaleLinear"), "ScaleLinear");
        assert_eq!(RUST_NAMING.type_name("d3"), "D3");
    }

    #[test]
    fn test_rust_naming_module() {
        assert_eq!(RUST_NAMING.module_name("ScaleLinear"), "scale_linear");
        assert_eq!(RUST_NAMING.file_stem("Plot"), "plot");
    }

    #[test]
    fn test_rust_naming_method() {
        assert_eq!(RUST_NAMING.method_name("axisBottom"), "axis_bottom");
        assert_eq!(RUST_NAMING.method_name("dot"), "dot");
    }

    #[test]
    fn test_rust_escape_reserved() {
        assert_eq!(RUST_NAMING.method_name("type"), "r#type");
        assert_eq!(RUST_NAMING.method_name("self"), "self_");
        assert_eq!(RUST_NAMING.module_name("type"), "r#type");
        assert_eq!(RUST_NAMING.file_stem("type"), "type");
    }

    #[test]
    fn test_generated_members_are_avoided() {
        assert_eq!(RUST_NAMING.method_name("content"), "content_");
        assert_eq!(RUST_NAMING.method_name("new"), "new_");
        assert_eq!(RUST_NAMING.method_name("from"), "from_");
        assert_eq!(RUST_NAMING.method_name("get"), "get_");
        assert_eq!(RUST_NAMING.method_name("withContent"), "with_content_");
    }
}
