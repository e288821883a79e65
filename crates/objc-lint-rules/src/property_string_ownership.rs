//! Rule requiring `NSString` properties to be declared `copy`.
//!
//! A mutable string assigned to a `strong` property can change underneath
//! its owner. Any resolved type whose text contains `NSString`, such as
//! `NSString *` or `NSString<Foo> *`, must carry the `copy` attribute.
//! Advisory only; no fix is offered.

use objc_lint_core::{DeclKind, PropertyAttribute, PropertyDecl, Rule, Severity, Violation};

/// Rule code for property-string-ownership.
pub const CODE: &str = "OC004";

/// Rule name for property-string-ownership.
pub const NAME: &str = "property-string-ownership";

const MESSAGE: &str = "NSString properties should use copy instead of strong";

/// Flags `NSString` properties not declared `copy`.
#[derive(Debug, Clone, Default)]
pub struct PropertyStringOwnership;

impl PropertyStringOwnership {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PropertyStringOwnership {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "NSString properties must be declared copy"
    }

    fn kind(&self) -> DeclKind {
        DeclKind::Property
    }

    fn check_property(&self, decl: &PropertyDecl) -> Vec<Violation> {
        let Some(ty) = decl.declared_type.as_deref() else {
            return Vec::new();
        };

        if ty.contains("NSString") && !decl.attributes.contains(PropertyAttribute::Copy) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use objc_lint_core::Location;

    fn property(ty: &str) -> PropertyDecl {
        PropertyDecl::new("title", Location::new("/src/Foo.h", 5, 30)).with_type(ty)
    }

    fn check(decl: &PropertyDecl) -> Vec<Violation> {
        PropertyStringOwnership::new().check_property(decl)
    }

    #[test]
    fn test_detects_strong_string() {
        let decl = property("NSString *").with_attribute(PropertyAttribute::Strong);
        let violations = check(&decl);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, MESSAGE);
        assert!(violations[0].fix.is_none());
    }

    #[test]
    fn test_detects_string_without_attributes() {
        assert_eq!(check(&property("NSString *")).len(), 1);
    }

    #[test]
    fn test_allows_copy_string() {
        let decl = property("NSString *")
            .with_attribute(PropertyAttribute::Nonatomic)
            .with_attribute(PropertyAttribute::Copy);
        assert!(check(&decl).is_empty());
    }

    #[test]
    fn test_ignores_other_types() {
        assert!(check(&property("NSNumber *")).is_empty());
    }

    #[test]
    fn test_skips_unresolved_type() {
        let decl = PropertyDecl::new("title", Location::new("/src/Foo.h", 5, 30));
        assert!(check(&decl).is_empty());
    }
}
