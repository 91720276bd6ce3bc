//! Rust backend of the detroit generator.
//!
//! Every namespace of a catalog becomes a module holding one type that wraps
//! a `detroit_chain::Chain`, with one method per descriptor. A `mod.rs`
//! declares the modules and re-exports the types.

mod doc;
mod generator;
mod naming;
mod rust_file;

pub mod ast;
pub mod files;

pub use ast::{Const, Field, Fn, Impl, Param, Struct};
pub use detroit_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::RUST_NAMING;
pub use rust_file::{RawCode, RustFile, Use};
