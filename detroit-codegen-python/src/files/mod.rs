//! Files emitted by the Python backend.

mod init_py;
mod namespace_py;

pub use init_py::InitPy;
pub use namespace_py::NamespacePy;
