//! # snark-lint-core
//!
//! Core framework for snark-lint, a comedically hostile style checker.
//!
//! This crate provides the engine and the contracts rules are written
//! against. It includes:
//!
//! - [`SourceParser`] trait for language frontends
//! - [`Rule`] and [`TextRule`] traits for per-node and whole-text checks
//! - [`Linter`] for orchestrating one analysis run
//! - [`Finding`] and [`Report`] for the ordered output
//!
//! ## Example
//!
//! ```ignore
//! use snark_lint_core::{Linter, SourceFile};
//!
//! let linter = Linter::builder()
//!     .parser(MyParser::new())
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let report = linter.lint(&SourceFile::load("victim.py")?);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod engine;
mod parse;
mod report;
mod rule;
mod source;
mod tree;
mod walker;

pub use config::{Config, ConfigError, RuleOptions};
pub use context::WalkContext;
pub use engine::{BuildError, Linter, LinterBuilder};
pub use parse::{ParseError, ParserBox, SourceParser};
pub use report::{Finding, Report};
pub use rule::{Rule, RuleBox, RuleCatalog, TextRule, TextRuleBox};
pub use source::{LoadError, SourceFile};
pub use tree::{LoopKind, NodeKind, SyntaxNode, SyntaxTree};
pub use walker::walk;
