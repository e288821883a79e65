//! Rule requiring every selector fragment to start with a lowercase letter.
//!
//! `- (void)SetValue:(id)v ForKey:(id)k;` yields two violations, one per
//! fragment, each anchored at its own fragment.

use objc_lint_core::utils::{char_at, lowercase_at};
use objc_lint_core::{DeclKind, MethodDecl, Replacement, Rule, Severity, Violation};

/// Rule code for method-selector-case.
pub const CODE: &str = "OC007";

/// Rule name for method-selector-case.
pub const NAME: &str = "method-selector-case";

const MESSAGE: &str = "Method names must start with a lowercase letter";

/// Flags selector fragments starting with an uppercase letter.
#[derive(Debug, Clone, Default)]
pub struct MethodSelectorCase;

impl MethodSelectorCase {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MethodSelectorCase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Selector fragments must start with a lowercase letter"
    }

    fn kind(&self) -> DeclKind {
        DeclKind::Method
    }

    fn check_method(&self, decl: &MethodDecl) -> Vec<Violation> {
        decl.selector
            .iter()
            .filter(|part| char_at(&part.name, 0).is_some_and(|c| c.is_ascii_uppercase()))
            .map(|part| {
                let fix =
                    Replacement::identifier(&part.location, &part.name, lowercase_at(&part.name, 0));
                Violation::new(CODE, NAME, Severity::Warning, part.location.clone(), MESSAGE)
                    .with_fix(fix)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objc_lint_core::Location;

    fn at(column: usize) -> Location {
        Location::new("/src/Foo.m", 12, column).with_offset(300 + column)
    }

    #[test]
    fn test_anchors_each_fragment() {
        let method = MethodDecl::new(at(1))
            .with_selector_part("SetValue", at(9))
            .with_selector_part("forKey", at(27))
            .with_selector_part("Context", at(43))
            .with_parameter("value", at(21))
            .with_parameter("key", at(37))
            .with_parameter("ctx", at(55));

        let violations = MethodSelectorCase::new().check_method(&method);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].location.column, 9);
        assert_eq!(violations[1].location.column, 43);

        let fixes: Vec<_> = violations
            .iter()
            .filter_map(|v| v.fix.as_ref())
            .map(|f| (f.new_text.as_str(), f.location.offset, f.location.length))
            .collect();
        assert_eq!(fixes, vec![("setValue", 309, 8), ("context", 343, 7)]);
    }

    #[test]
    fn test_allows_lowercase_selector() {
        let method = MethodDecl::new(at(1)).with_selector_part("viewDidLoad", at(9));
        assert!(MethodSelectorCase::new().check_method(&method).is_empty());
    }

    #[test]
    fn test_skips_empty_fragments() {
        let method = MethodDecl::new(at(1))
            .with_selector_part("", at(9))
            .with_parameter("x", at(10));
        assert!(MethodSelectorCase::new().check_method(&method).is_empty());
    }

    #[test]
    fn test_fix_does_not_retrigger() {
        let method = MethodDecl::new(at(1)).with_selector_part("Reload", at(9));
        let violations = MethodSelectorCase::new().check_method(&method);
        let fixed = &violations[0].fix.as_ref().expect("fix offered").new_text;
        let method = MethodDecl::new(at(1)).with_selector_part(fixed.as_str(), at(9));
        assert!(MethodSelectorCase::new().check_method(&method).is_empty());
    }
}
