//! # snark-lint-rules
//!
//! The built-in rule catalog for snark-lint.
//!
//! Every rule is always on. Configuration can tune a rule's parameters
//! but cannot disable it; the linter has opinions and shares all of them.
//!
//! ## Available Rules
//!
//! | Name | Checks | Tone |
//! |------|--------|------|
//! | `function-naming` | function names are snake_case | underscores only |
//! | `class-naming` | class names are CapWords | PEP 8 citation |
//! | `missing-docstring` | defs carry a docstring | guilt trip |
//! | `short-docstring` | docstrings reach 10 characters | barely a grunt |
//! | `docstring-format` | docstrings read like a sentence | grammar lecture |
//! | `single-letter-name` | assignments avoid one-letter names | mock sympathy |
//! | `multi-import` | one import per statement | tiny eyes |
//! | `nested-loop` | loops do not nest | mock confusion |
//! | `comment-presence` | comments exist at all | quoted back |
//! | `comment-length` | comment text within 72 characters | readability |
//! | `line-length` | lines within 79 (72 for comments) | War and Peace |
//!
//! ## Usage
//!
//! ```ignore
//! use snark_lint_core::Linter;
//! use snark_lint_py::PythonParser;
//! use snark_lint_rules::default_catalog;
//!
//! let linter = Linter::builder()
//!     .parser(PythonParser::new())
//!     .catalog(default_catalog())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod class_naming;
mod comments;
mod docstrings;
mod function_naming;
mod imports;
mod line_length;
mod nested_loop;
mod single_letter;

pub use catalog::{catalog_with, default_catalog};
pub use class_naming::ClassNaming;
pub use comments::{CommentLength, CommentPresence};
pub use docstrings::{DocstringFormat, MissingDocstring, ShortDocstring};
pub use function_naming::FunctionNaming;
pub use imports::MultiImport;
pub use line_length::LineLength;
pub use nested_loop::NestedLoop;
pub use single_letter::SingleLetterName;

/// Re-export core types for convenience.
pub use snark_lint_core::{Finding, Rule, RuleCatalog, TextRule};
