//! Rule requiring property names to start with a lowercase letter.
//!
//! A single leading underscore is skipped, so `_Foo` is checked at `F`.
//! Only one underscore is skipped: `__Foo` is checked at its second `_`
//! and therefore never flagged.

use objc_lint_core::utils::{char_at, lowercase_at};
use objc_lint_core::{DeclKind, PropertyDecl, Replacement, Rule, Severity, Violation};

/// Rule code for property-name-case.
pub const CODE: &str = "OC003";

/// Rule name for property-name-case.
pub const NAME: &str = "property-name-case";

const MESSAGE: &str = "Property names must start with a lowercase letter";

/// Flags property names starting with an uppercase letter.
#[derive(Debug, Clone, Default)]
pub struct PropertyNameCase;

impl PropertyNameCase {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Index of the character that decides the property name's case.
fn case_index(name: &str) -> usize {
    usize::from(name.starts_with('_'))
}

impl Rule for PropertyNameCase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Property names must start with a lowercase letter"
    }

    fn kind(&self) -> DeclKind {
        DeclKind::Property
    }

    fn check_property(&self, decl: &PropertyDecl) -> Vec<Violation> {
        let index = case_index(&decl.name);
        if !char_at(&decl.name, index).is_some_and(|c| c.is_ascii_uppercase()) {
            return Vec::new();
        }

        let fix = Replacement::identifier(
            &decl.location,
            &decl.name,
            lowercase_at(&decl.name, index),
        );
        vec![
            Violation::new(CODE, NAME, Severity::Warning, decl.location.clone(), MESSAGE)
                .with_fix(fix),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objc_lint_core::Location;

    fn check(name: &str) -> Vec<Violation> {
        let location = Location::new("/src/Foo.h", 5, 30).with_offset(120);
        PropertyNameCase::new().check_property(&PropertyDecl::new(name, location))
    }

    fn fixed_text(violations: &[Violation]) -> &str {
        &violations[0].fix.as_ref().expect("fix offered").new_text
    }

    #[test]
    fn test_detects_uppercase_property() {
        let violations = check("Title");
        assert_eq!(violations.len(), 1);
        assert_eq!(fixed_text(&violations), "title");
        assert_eq!(violations[0].fix.as_ref().map(|f| f.location.length), Some(5));
    }

    #[test]
    fn test_skips_single_leading_underscore() {
        let violations = check("_Foo");
        assert_eq!(violations.len(), 1);
        assert_eq!(fixed_text(&violations), "_foo");
    }

    #[test]
    fn test_skips_exactly_one_underscore() {
        assert!(check("__Foo").is_empty());
    }

    #[test]
    fn test_allows_lowercase_property() {
        assert!(check("title").is_empty());
        assert!(check("_title").is_empty());
    }

    #[test]
    fn test_short_names_are_safe() {
        assert!(check("").is_empty());
        assert!(check("_").is_empty());
        assert_eq!(fixed_text(&check("X")), "x");
    }

    #[test]
    fn test_fix_does_not_retrigger() {
        for name in ["URLString", "_Delegate"] {
            let violations = check(name);
            assert!(check(fixed_text(&violations)).is_empty(), "{name}");
        }
    }
}
