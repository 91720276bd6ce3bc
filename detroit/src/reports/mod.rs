//! Report data structures for commands.
//!
//! Operations build reports; commands render them to an [`Output`].

mod bake;
mod check;
mod import;
mod list;
mod output;

pub use bake::{BakeReport, GenerationResult, PreviewFile};
pub use check::CheckReport;
pub use import::ImportReport;
pub use list::{ListReport, MethodEntry, NamespaceEntry};
#[cfg(test)]
pub use output::StringOutput;
pub use output::{Output, Report, TerminalOutput};
