//! Python AST builders for classes and functions.

mod class;
mod def;

pub use class::Class;
pub use def::Def;
