//! Catalog of JavaScript namespaces and method descriptors.
//!
//! A catalog (`detroit.toml`) lists the namespaces to generate, one type
//! each, with one method descriptor per JavaScript method:
//!
//! ```toml
//! [generator]
//! language = "rust"
//!
//! [[namespaces]]
//! name = "Plot"
//!
//! [[namespaces.methods]]
//! name = "dot"
//! params = ["data", "options"]
//! ```
//!
//! Catalogs are validated eagerly; errors are [`miette`] diagnostics pointing
//! into the TOML source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod catalog;
mod error;
mod file;
mod language;
mod param;
mod parse;
mod validate;

pub use catalog::{
    Catalog, DEFAULT_HEADER, DEFAULT_RUNTIME, GeneratorConfig, Method, MethodKind, Namespace,
    NamespaceKind, Rendering,
};
pub use error::{Error, Result, SourceContext};
pub use file::CatalogFile;
pub use language::Language;
pub use param::{Param, ParamKind};
pub use parse::{CATALOG_FILE, parse_catalog};
pub use validate::{ParseContext, find_table_span, find_value_span};
