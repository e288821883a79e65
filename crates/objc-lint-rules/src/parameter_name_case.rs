//! Rule requiring method parameter names to start with a lowercase letter.

use objc_lint_core::utils::{char_at, lowercase_at};
use objc_lint_core::{DeclKind, MethodDecl, Replacement, Rule, Severity, Violation};

/// Rule code for parameter-name-case.
pub const CODE: &str = "OC008";

/// Rule name for parameter-name-case.
pub const NAME: &str = "parameter-name-case";

const MESSAGE: &str = "Parameter names must start with a lowercase letter";

/// Flags parameter names starting with an uppercase letter.
#[derive(Debug, Clone, Default)]
pub struct ParameterNameCase;

impl ParameterNameCase {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ParameterNameCase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Parameter names must start with a lowercase letter"
    }

    fn kind(&self) -> DeclKind {
        DeclKind::Method
    }

    fn check_method(&self, decl: &MethodDecl) -> Vec<Violation> {
        let mut violations = Vec::new();

        for param in &decl.parameters {
            if !char_at(&param.name, 0).is_some_and(|c| c.is_ascii_uppercase()) {
                continue;
            }

            let fix =
                Replacement::identifier(&param.location, &param.name, lowercase_at(&param.name, 0));
            violations.push(
                Violation::new(CODE, NAME, Severity::Warning, param.location.clone(), MESSAGE)
                    .with_fix(fix),
            );
        }

        violations
    }
}
