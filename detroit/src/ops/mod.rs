//! Core operations.
//!
//! The logic behind each command, separated from argument parsing and
//! output rendering.

pub mod bake;
pub mod check;
pub mod import;
pub mod list;

pub use bake::{BakeOptions, bake};
pub use check::check;
pub use import::import;
pub use list::list;

#[cfg(test)]
pub(crate) const PLOT: &str = r#"
[[namespaces]]
name = "Plot"
doc = "Observable Plot."

[[namespaces.methods]]
name = "dot"
params = ["data", "options"]
doc = "Draws circles."

[[namespaces.methods]]
name = "from"
returns = "Axis"

[[namespaces]]
name = "Axis"
root = "Plot.axisX()"

[[namespaces.methods]]
name = "label"
params = ["text"]
"#;
