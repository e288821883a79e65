//! Rule preferring `NSInteger` over a bare `int` property type.
//!
//! The type text must equal `int` exactly; `uint32_t`, `NSInteger` and
//! `unsigned int` are left alone.

use objc_lint_core::{DeclKind, PropertyDecl, Rule, Severity, Violation};

/// Rule code for property-prefer-sized-int.
pub const CODE: &str = "OC005";

/// Rule name for property-prefer-sized-int.
pub const NAME: &str = "property-prefer-sized-int";

const MESSAGE: &str = "Prefer NSInteger over int";

/// Flags properties whose type is exactly `int`.
#[derive(Debug, Clone, Default)]
pub struct PropertyPreferSizedInt;

impl PropertyPreferSizedInt {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PropertyPreferSizedInt {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Properties should use NSInteger instead of int"
    }

    fn kind(&self) -> DeclKind {
        DeclKind::Property
    }

    fn check_property(&self, decl: &PropertyDecl) -> Vec<Violation> {
        if decl.declared_type.as_deref() == Some("int") {
            vec![Violation::new(
                CODE,
                NAME,
                Severity::Warning,
                decl.location.clone(),
                MESSAGE,
            )]
        } else {
            Vec::new()
        }
    }
}
