//! Rule requiring protocol-typed (delegate) properties to be `weak`.
//!
//! # Detected Patterns
//!
//! - `@property (nonatomic, strong) id<FooDelegate> delegate;`
//!
//! A type counts as protocol-qualified when its text contains both `<` and
//! `>`. Types whose text contains `Array` anywhere are excluded, so that
//! lightweight generics such as `NSArray<NSString *> *` pass. The check is
//! purely textual. Advisory only; no fix is offered.

use objc_lint_core::{DeclKind, PropertyAttribute, PropertyDecl, Rule, Severity, Violation};

/// Rule code for property-delegate-weak.
pub const CODE: &str = "OC006";

/// Rule name for property-delegate-weak.
pub const NAME: &str = "property-delegate-weak";

const MESSAGE: &str = "Delegate properties should be declared weak";

/// Flags protocol-typed properties not declared `weak`.
#[derive(Debug, Clone, Default)]
pub struct PropertyDelegateWeak;

impl PropertyDelegateWeak {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_protocol_qualified(ty: &str) -> bool {
    ty.contains('<') && ty.contains('>') && !ty.contains("Array")
}

impl Rule for PropertyDelegateWeak {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Delegate properties must be declared weak"
    }

    fn kind(&self) -> DeclKind {
        DeclKind::Property
    }

    fn check_property(&self, decl: &PropertyDecl) -> Vec<Violation> {
        let Some(ty) = decl.declared_type.as_deref() else {
            return Vec::new();
        };

        if is_protocol_qualified(ty) && !decl.attributes.contains(PropertyAttribute::Weak) {
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
        PropertyDecl::new("delegate", Location::new("/src/Foo.h", 9, 40)).with_type(ty)
    }

    fn check(decl: &PropertyDecl) -> Vec<Violation> {
        PropertyDelegateWeak::new().check_property(decl)
    }

    #[test]
    fn test_detects_strong_delegate() {
        let decl = property("<SomeProtocol>").with_attribute(PropertyAttribute::Strong);
        let violations = check(&decl);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].fix.is_none());
    }

    #[test]
    fn test_detects_id_qualified_delegate() {
        assert_eq!(check(&property("id<UITableViewDelegate>")).len(), 1);
    }

    #[test]
    fn test_allows_weak_delegate() {
        let decl = property("id<FooDelegate>").with_attribute(PropertyAttribute::Weak);
        assert!(check(&decl).is_empty());
    }

    #[test]
    fn test_array_types_are_excluded() {
        assert!(check(&property("NSArray<NSString *> *")).is_empty());
        assert!(check(&property("NSMutableArray<id<Foo>> *")).is_empty());
        assert!(check(&property("ArrayProvider<Foo>")).is_empty());
    }

    #[test]
    fn test_needs_both_brackets() {
        assert!(check(&property("Foo<")).is_empty());
        assert!(check(&property("NSObject *")).is_empty());
    }

    #[test]
    fn test_skips_unresolved_type() {
        let decl = PropertyDecl::new("delegate", Location::new("/src/Foo.h", 9, 40));
        assert!(check(&decl).is_empty());
    }
}
