//! Rule forbidding underscores in type names.
//!
//! The diagnostic points at the first underscore; the fix rewrites the whole
//! name with every underscore removed (`My_Class` → `MyClass`).

use objc_lint_core::utils::strip_underscores;
use objc_lint_core::{DeclKind, Replacement, Rule, Severity, TypeDecl, Violation};

/// Rule code for type-name-underscore.
pub const CODE: &str = "OC002";

/// Rule name for type-name-underscore.
pub const NAME: &str = "type-name-underscore";

const MESSAGE: &str = "Type names must not contain underscores";

/// Flags type names containing `_`.
#[derive(Debug, Clone, Default)]
pub struct TypeNameUnderscore;

impl TypeNameUnderscore {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TypeNameUnderscore {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Type names must not contain underscores"
    }

    fn kind(&self) -> DeclKind {
        DeclKind::Type
    }

    fn check_type(&self, decl: &TypeDecl) -> Vec<Violation> {
        let Some(pos) = decl.name.find('_') else {
            return Vec::new();
        };

        let fix = Replacement::identifier(
            &decl.location,
            &decl.name,
            strip_underscores(&decl.name),
        );
        vec![
            Violation::new(
                CODE,
                NAME,
                Severity::Warning,
                decl.location.shifted(pos),
                MESSAGE,
            )
            .with_fix(fix),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objc_lint_core::Location;

    fn check(name: &str) -> Vec<Violation> {
        let location = Location::new("/src/Foo.h", 3, 12).with_offset(40);
        TypeNameUnderscore::new().check_type(&TypeDecl::new(name, location))
    }

    #[test]
    fn test_detects_underscore() {
        let violations = check("My_Class");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);

        let fix = violations[0].fix.as_ref().expect("fix offered");
        assert_eq!(fix.new_text, "MyClass");
        assert_eq!(fix.location.offset, 40);
        assert_eq!(fix.location.length, 8);
    }

    #[test]
    fn test_location_points_at_first_underscore() {
        let violations = check("My_Cool_Class");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.offset, 42);
        assert_eq!(violations[0].location.column, 14);
        assert_eq!(violations[0].location.line, 3);
    }

    #[test]
    fn test_leading_underscore_is_flagged() {
        let violations = check("_Hidden");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.offset, 40);
        assert_eq!(
            violations[0].fix.as_ref().map(|f| f.new_text.as_str()),
            Some("Hidden")
        );
    }

    #[test]
    fn test_allows_plain_names() {
        assert!(check("MyClass").is_empty());
        assert!(check("").is_empty());
    }

    #[test]
    fn test_fix_does_not_retrigger() {
        let violations = check("a__b_c");
        let fixed = &violations[0].fix.as_ref().expect("fix offered").new_text;
        assert!(check(fixed).is_empty());
    }
}
