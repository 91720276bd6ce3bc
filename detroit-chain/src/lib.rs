//! Immutable JavaScript call-chain builders.
//!
//! A [`Chain`] holds the text of a JavaScript expression such as `Plot` or
//! `d3.scaleLinear()`. Every call returns a new chain whose text is the old
//! text followed by `.method(args)`; nothing is ever mutated, so chains can be
//! shared and reused freely.
//!
//! Arguments are converted to JavaScript source with [`Value`]. An argument
//! given as `None` is absent and never appears in the output.
//!
//! ```
//! use detroit_chain::{ABSENT, Chain, Rendering, js};
//!
//! let plot = Chain::new("Plot");
//! let dot = plot.call("dot", (js("data"), ABSENT), Rendering::Repr);
//! assert_eq!(dot.content(), "Plot.dot(data)");
//!
//! let styled = dot.call("plot", (), Rendering::Repr);
//! assert_eq!(styled.to_string(), "Plot.dot(data).plot()");
//! ```
//!
//! Generated namespace types wrap a [`Chain`] and register themselves with
//! [`impl_expression!`] so they can be passed back in as arguments.

mod macros;

mod args;
mod chain;
mod value;

pub use args::{ABSENT, Args, IntoArg, IntoArgs, format_arguments};
pub use chain::Chain;
pub use value::{Rendering, Value, js};
