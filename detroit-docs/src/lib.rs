//! Importer of scraped documentation.
//!
//! The scraper of the D3 and Observable Plot API references writes one JSON
//! record per documented method. This crate turns those records into a
//! [`Catalog`](detroit_catalog::Catalog): headings become signatures,
//! paragraphs are wrapped and code blocks fenced.
//!
//! ```
//! use detroit_docs::{ImportOptions, Layout, import_records, parse_records};
//!
//! let records = parse_records(
//!     r#"[{"name": "dot", "blocks": [{"heading": "Plot.dot(data, options)"}]}]"#,
//! )
//! .unwrap();
//! let imported = import_records(&records, &ImportOptions::new(Layout::Flat, "Plot"));
//!
//! assert_eq!(imported.catalog.namespaces[0].methods[0].name, "dot");
//! ```

pub mod layout;
mod record;
mod signature;
mod wrap;

pub use layout::{ImportOptions, Imported, Layout, Skipped, import_records};
pub use record::{Block, Record, load_records, parse_records};
pub use signature::{Signature, parse_signature};
pub use wrap::{WRAP_WIDTH, assemble_doc, see_more, wrap_paragraph};
