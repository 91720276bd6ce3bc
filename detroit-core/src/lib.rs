//! Core utilities and types for the detroit generator.
//!
//! This crate provides the file-writing primitives and string helpers
//! shared by the catalog, the doc importer and the language backends.

mod file;
mod utils;

// File operations
pub use file::{File, GENERATED_HEADER, GeneratedFile};
// String utilities
pub use utils::{is_identifier, to_pascal_case, to_snake_case};
