//! Rule requiring type names to start with an uppercase letter.
//!
//! # Detected Patterns
//!
//! - `@interface myClass : NSObject`
//!
//! # Fix
//!
//! Replaces the whole type name with its first letter uppercased
//! (`myClass` → `MyClass`).

use objc_lint_core::utils::{char_at, uppercase_first};
use objc_lint_core::{DeclKind, Replacement, Rule, Severity, TypeDecl, Violation};

/// Rule code for type-name-case.
pub const CODE: &str = "OC001";

/// Rule name for type-name-case.
pub const NAME: &str = "type-name-case";

const MESSAGE: &str = "Type names must not start with a lowercase letter";

/// Flags type names starting with a lowercase letter.
#[derive(Debug, Clone, Default)]
pub struct TypeNameCase;

impl TypeNameCase {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TypeNameCase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Type names must start with an uppercase letter"
    }

    fn kind(&self) -> DeclKind {
        DeclKind::Type
    }

    fn check_type(&self, decl: &TypeDecl) -> Vec<Violation> {
        if !char_at(&decl.name, 0).is_some_and(|c| c.is_ascii_lowercase()) {
            return Vec::new();
        }

        let fix = Replacement::identifier(&decl.location, &decl.name, uppercase_first(&decl.name));
        vec![
            Violation::new(CODE, NAME, Severity::Warning, decl.location.clone(), MESSAGE)
                .with_fix(fix),
        ]
    }
}
