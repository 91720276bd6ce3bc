//! Python-specific naming conventions.

use detroit_codegen::NamingConvention;
use detroit_core::to_snake_case;

fn keep(name: &str) -> String {
    name.to_string()
}

fn escape_python_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Python naming conventions.
///
/// Classes keep the namespace name and methods keep the JavaScript name;
/// keywords (and `bin`) get a trailing underscore, e.g. `from` -> `from_`.
pub const PY_NAMING: NamingConvention = NamingConvention {
    namespace_to_type: keep,
    namespace_to_module: to_snake_case,
    method_to_name: keep,
    reserved_words: &[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield", "bin",
    ],
    escape_reserved: escape_python_reserved,
    reserved_members: &["content", "get"],
};
