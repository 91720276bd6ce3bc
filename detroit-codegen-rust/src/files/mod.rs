//! Files emitted by the Rust backend.

mod mod_rs;
mod namespace_rs;

pub use mod_rs::ModRs;
pub use namespace_rs::NamespaceRs;
