//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how namespace and method names from the catalog become type,
/// module and method identifiers, and how reserved words are handled.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a namespace name to a type name (e.g., "scaleLinear" -> "ScaleLinear")
    pub namespace_to_type: fn(&str) -> String,
    /// Transform a namespace name to a module/file name (e.g., "ScaleLinear" -> "scale_linear")
    pub namespace_to_module: fn(&str) -> String,
    /// Transform a JavaScript method name to a method identifier
    pub method_to_name: fn(&str) -> String,
    /// Reserved words of the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust, "from" -> "from_" in Python)
    pub escape_reserved: fn(&str) -> String,
    /// Members every generated type already defines
    pub reserved_members: &'static [&'static str],
}

impl NamingConvention {
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.namespace_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Module identifier of a namespace; may be escaped.
    pub fn module_name(&self, name: &str) -> String {
        let transformed = (self.namespace_to_module)(name);
        self.safe_name(&transformed)
    }

    /// File stem of a namespace module (raw identifier prefix removed).
    pub fn file_stem(&self, name: &str) -> String {
        let module = self.module_name(name);
        module.strip_prefix("r#").unwrap_or(&module).to_string()
    }

    /// Method identifier; names clashing with generated members get a
    /// trailing underscore.
    pub fn method_name(&self, name: &str) -> String {
        let transformed = (self.method_to_name)(name);
        if self.reserved_members.contains(&transformed.as_str()) {
            return format!("{}_", transformed);
        }
        self.safe_name(&transformed)
    }

    /// Parameter identifier; parameter names keep their JavaScript spelling.
    pub fn param_name(&self, name: &str) -> String {
        self.safe_name(name)
    }
}
