//! Catalog layouts for scraped records.
//!
//! - [`Layout::Flat`]: every record is a chain method of a single namespace
//!   (Observable Plot).
//! - [`Layout::Grouped`]: records are grouped around the static methods of a
//!   root namespace, and `prefix.method` records become sub-object
//!   namespaces (D3).

mod flat;
mod grouped;

use std::{fmt, str::FromStr};

use detroit_catalog::{Catalog, MethodKind, Rendering};

use crate::{Record, Signature};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Flat,
    Grouped,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Flat => "flat",
            Layout::Grouped => "grouped",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Layout::Flat),
            "grouped" => Ok(Layout::Grouped),
            _ => Err(format!("unknown layout '{}', expected 'flat' or 'grouped'", s)),
        }
    }
}

/// Settings of an import.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    pub layout: Layout,
    /// Root expression, e.g. `Plot` or `d3`
    pub root: String,
    /// Name of the root namespace, defaults to the root expression
    pub name: Option<String>,
    /// Rendering of the root namespace; `repr` for flat and `plain` for
    /// grouped when unset
    pub rendering: Option<Rendering>,
    /// Documentation URL of the root namespace
    pub url: Option<String>,
}

impl ImportOptions {
    pub fn new(layout: Layout, root: impl Into<String>) -> Self {
        Self {
            layout,
            root: root.into(),
            name: None,
            rendering: None,
            url: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_rendering(mut self, rendering: Rendering) -> Self {
        self.rendering = Some(rendering);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    fn namespace_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.root)
    }

    /// Prefix of qualified heads, e.g. `d3.`
    fn root_prefix(&self) -> String {
        format!("{}.", self.root)
    }
}

/// A record left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub name: String,
    pub reason: String,
}

/// Result of an import: the catalog and every record left out of it.
#[derive(Debug, Clone)]
pub struct Imported {
    pub catalog: Catalog,
    pub skipped: Vec<Skipped>,
}

impl Imported {
    fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            skipped: Vec::new(),
        }
    }

    fn skip(&mut self, name: &str, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(record = %name, %reason, "skipped record");
        self.skipped.push(Skipped {
            name: name.to_string(),
            reason,
        });
    }
}

/// A documented heading without a parameter list is a constant.
fn method_kind(record: &Record, signature: &Signature) -> MethodKind {
    if record.heading().is_some() && !signature.parenthesized {
        MethodKind::Constant
    } else {
        MethodKind::Call
    }
}

/// Build a catalog from scraped records.
///
/// Records that cannot become a valid descriptor are skipped and reported;
/// the catalog itself is left for the caller to validate.
pub fn import_records(records: &[Record], options: &ImportOptions) -> Imported {
    match options.layout {
        Layout::Flat => flat::import(records, options),
        Layout::Grouped => grouped::import(records, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_str() {
        assert_eq!("flat".parse::<Layout>().unwrap(), Layout::Flat);
        assert_eq!("grouped".parse::<Layout>().unwrap(), Layout::Grouped);
        assert!("tree".parse::<Layout>().unwrap_err().contains("'tree'"));
        assert_eq!(Layout::Grouped.to_string(), "grouped");
    }

    #[test]
    fn test_options_defaults() {
        let options = ImportOptions::new(Layout::Grouped, "d3");
        assert_eq!(options.namespace_name(), "d3");
        assert_eq!(options.root_prefix(), "d3.");
        assert_eq!(options.with_name("D3").namespace_name(), "D3");
    }
}
