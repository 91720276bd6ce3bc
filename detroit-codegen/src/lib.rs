//! Shared code generation utilities for the detroit generator.
//!
//! This crate provides the language-agnostic pieces used by the language
//! backends (`detroit-codegen-rust`, `detroit-codegen-python`).
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language abstractions (LanguageCodegen, NamingConvention)
//! - [`plan`] - Catalog resolved to final identifiers for one language
//! - [`docs`] - Target-neutral documentation blocks
//! - [`lints`] - Catalog lints

pub mod builder;
pub mod docs;
pub mod language;
pub mod lints;
pub mod plan;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use docs::{DocBlock, parse_doc};
pub use language::{GenerateResult, LanguageCodegen, NamingConvention, PreviewFile, write_files};
pub use lints::{Diagnostic, Lint, Severity, run_lints};
pub use plan::{GenerationPlan, Import, MethodPlan, NamespacePlan};
