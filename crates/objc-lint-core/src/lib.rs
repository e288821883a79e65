//! # objc-lint-core
//!
//! Core framework for checking Objective-C declarations against code
//! standards.
//!
//! A front end parses source and hands over [`Declaration`] values; this
//! crate decides which of them belong to user code, runs [`Rule`]s over
//! them, and reports [`Violation`]s to a [`DiagnosticSink`]. It includes:
//!
//! - [`Declaration`] and friends, the lexical shape of declarations
//! - [`Rule`] trait for per-declaration rules
//! - [`Checker`] for routing declarations to rules
//! - [`OriginFilter`] for skipping toolchain-owned headers
//! - [`Violation`] and [`Replacement`] for findings and suggested fixes
//!
//! ## Example
//!
//! ```ignore
//! use objc_lint_core::{Checker, Config, LintResult};
//!
//! let checker = Checker::builder()
//!     .config(Config::default())
//!     .rule(MyRule::new())
//!     .build();
//!
//! let mut result = LintResult::new();
//! checker.check_all(declarations, &mut result);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod decl;
mod origin;
mod rule;
mod sink;
mod types;

/// Reading declaration streams.
pub mod input;

/// Utility modules for rule implementations.
pub mod utils;

pub use checker::{Checker, CheckerBuilder};
pub use config::{Config, ConfigError, OriginConfig};
pub use decl::{
    DeclKind, Declaration, MethodDecl, NamedPart, PropertyAttribute, PropertyAttributes,
    PropertyDecl, TypeDecl,
};
pub use origin::{OriginFilter, DEFAULT_SYSTEM_PREFIX};
pub use rule::{Rule, RuleBox};
pub use sink::DiagnosticSink;
pub use types::{LintResult, Location, Replacement, Severity, Violation, ViolationDiagnostic};
