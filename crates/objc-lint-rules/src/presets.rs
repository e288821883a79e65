//! The built-in rule set.

use crate::{
    MethodSelectorCase, ParameterNameCase, PropertyDelegateWeak, PropertyNameCase,
    PropertyPreferSizedInt, PropertyStringOwnership, TypeNameCase, TypeNameUnderscore,
};
use objc_lint_core::{Checker, Config, RuleBox};

/// Returns all built-in rules, in code order.
///
/// Every rule runs for every user declaration of its kind; there is no
/// per-rule selection.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(TypeNameCase::new()),
        Box::new(TypeNameUnderscore::new()),
        Box::new(PropertyNameCase::new()),
        Box::new(PropertyStringOwnership::new()),
        Box::new(PropertyPreferSizedInt::new()),
        Box::new(PropertyDelegateWeak::new()),
        Box::new(MethodSelectorCase::new()),
        Box::new(ParameterNameCase::new()),
    ]
}

/// Builds a checker running [`all_rules`] with the given configuration.
#[must_use]
pub fn standard_checker(config: Config) -> Checker {
    Checker::builder().config(config).rules(all_rules()).build()
}
