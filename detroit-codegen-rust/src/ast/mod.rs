//! Rust AST builders for structs, impls, and functions, rendered through
//! [`detroit_codegen::CodeBuilder`].

mod fns;
mod impls;
mod structs;

pub use fns::{Fn, Param};
pub use impls::{Const, Impl};
pub use structs::{Field, Struct};
