//! Generates visitor-pattern node hierarchies from a terse grammar.
//!
//! Each grammar line describes one node variant:
//!
//! ```text
//! Binary : Expr left, Token operator, Expr right
//! ```
//!
//! A category (`Expr`) and its lines become one module holding the base
//! type, an `IExprVisitor<T>` interface and one node type per line.

pub mod error;
pub mod naming;

#[macro_use]
mod macros;

pub mod emit;
pub mod grammar;
pub mod ir;
pub mod print;

pub use emit::{emit_module, emit_source};
pub use error::{Error, Result};
pub use print::{CSharp, Printer, Rust, Target};
