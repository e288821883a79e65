//! Rule trait for defining lint rules.

use crate::decl::{DeclKind, MethodDecl, PropertyDecl, TypeDecl};
use crate::types::{Severity, Violation};

/// A lint rule evaluated against one kind of declaration.
///
/// A rule declares the [`DeclKind`] it inspects and overrides the matching
/// `check_*` method. The [`Checker`](crate::Checker) only calls the method
/// matching the rule's kind, so the other defaults are never reached.
///
/// Rules are pure: the same declaration always yields the same violations,
/// and no rule depends on another having run.
///
/// # Example
///
/// ```ignore
/// use objc_lint_core::{DeclKind, Rule, TypeDecl, Violation};
///
/// pub struct NoFooTypes;
///
/// impl Rule for NoFooTypes {
///     fn name(&self) -> &'static str { "no-foo-types" }
///     fn code(&self) -> &'static str { "OC900" }
///     fn kind(&self) -> DeclKind { DeclKind::Type }
///
///     fn check_type(&self, decl: &TypeDecl) -> Vec<Violation> {
///         if decl.name == "Foo" {
///             vec![Violation::new(
///                 self.code(),
///                 self.name(),
///                 self.default_severity(),
///                 decl.location.clone(),
///                 "Foo is not a type name",
///             )]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "type-name-case").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "OC001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Returns the kind of declaration this rule inspects.
    fn kind(&self) -> DeclKind;

    /// Checks a type declaration.
    fn check_type(&self, _decl: &TypeDecl) -> Vec<Violation> {
        Vec::new()
    }

    /// Checks a property declaration.
    fn check_property(&self, _decl: &PropertyDecl) -> Vec<Violation> {
        Vec::new()
    }

    /// Checks a method declaration.
    fn check_method(&self, _decl: &MethodDecl) -> Vec<Violation> {
        Vec::new()
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
