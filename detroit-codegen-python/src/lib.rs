//! Python backend of the detroit generator.
//!
//! Every namespace of a catalog becomes a module holding one class whose
//! methods return new instances carrying the extended JavaScript text:
//!
//! ```python
//! from namespaces import Plot
//!
//! str(Plot().dot().plot())  # 'Plot.dot().plot()'
//! ```
//!
//! An `__init__.py` imports every class.

mod doc;
mod generator;
mod literal;
mod naming;
mod py_file;

pub mod ast;
pub mod files;

pub use ast::{Class, Def};
pub use detroit_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::Generator;
pub use naming::PY_NAMING;
pub use py_file::{Import, PyFile};
