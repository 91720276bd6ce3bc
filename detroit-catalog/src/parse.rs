//! Catalog parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{
    Catalog, Error, Result,
    error::SourceContext,
    validate::{ParseContext, validate_catalog},
};

/// Default catalog filename.
pub const CATALOG_FILE: &str = "detroit.toml";

impl FromStr for Catalog {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_catalog(s, CATALOG_FILE)
    }
}

impl Catalog {
    /// Parse a catalog file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_catalog(&content, &path.display().to_string())
    }

    /// Parse a catalog from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_catalog(content, filename)
    }

    /// Validate a catalog built in memory.
    ///
    /// Diagnostics point into the TOML the catalog would be saved as.
    pub fn validate(&self) -> Result<()> {
        let content = self.to_toml_string()?;
        validate_catalog(self, &ParseContext::new(&content, "<catalog>"))
    }

    /// Serialize the catalog to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|source| Box::new(Error::Serialize { source }))
    }
}

/// Parse and validate a catalog, using `filename` in diagnostics.
pub fn parse_catalog(content: &str, filename: &str) -> Result<Catalog> {
    let source_ctx = SourceContext::new(content, filename);
    let catalog: Catalog = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_catalog(&catalog, &ParseContext::new(content, filename))?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Language, NamespaceKind, Rendering};

    #[test]
    fn test_defaults() {
        let catalog: Catalog = "[[namespaces]]\nname = \"Plot\"\n".parse().unwrap();
        assert_eq!(catalog.generator.language, Language::Rust);
        assert_eq!(catalog.generator.runtime, "detroit_chain");
        let plot = &catalog.namespaces[0];
        assert_eq!(plot.kind, NamespaceKind::Chain);
        assert_eq!(plot.rendering, Rendering::Repr);
        assert!(plot.methods.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Catalog = "".parse().unwrap();
        assert!(catalog.namespaces.is_empty());
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = "[[namespaces]]\nname = ".parse::<Catalog>().unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_param_is_a_parse_error() {
        let src = r#"
[[namespaces]]
name = "Plot"

[[namespaces.methods]]
name = "dot"
params = ["{data}"]
"#;
        assert!(matches!(*src.parse::<Catalog>().unwrap_err(), Error::Parse { .. }));
    }

    #[test]
    fn test_validate_in_memory_catalog() {
        let mut catalog = Catalog::default();
        catalog.namespaces.push(crate::Namespace::new("Plot"));
        catalog.namespaces[0].methods.push(crate::Method::new(""));
        let err = catalog.validate().unwrap_err();
        assert!(matches!(*err, Error::MissingName { .. }));
    }
}
