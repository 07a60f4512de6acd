//! # snark-lint-py
//!
//! Python frontend for snark-lint.
//!
//! Wraps the Tree-sitter Python grammar and maps its concrete syntax tree
//! onto the simplified tree that `snark-lint-core` rules inspect. Syntax
//! errors are reported with the line of the first offending construct, so
//! the engine can point its one complaint somewhere useful.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod python;

pub use python::PythonParser;
