//! # objc-lint-rules
//!
//! Built-in code standards rules for objc-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Kind | Description |
//! |------|------|------|-------------|
//! | OC001 | `type-name-case` | type | Type names must start with an uppercase letter |
//! | OC002 | `type-name-underscore` | type | Type names must not contain underscores |
//! | OC003 | `property-name-case` | property | Property names must start with a lowercase letter |
//! | OC004 | `property-string-ownership` | property | `NSString` properties must be `copy` |
//! | OC005 | `property-prefer-sized-int` | property | Prefer `NSInteger` over `int` |
//! | OC006 | `property-delegate-weak` | property | Delegate properties must be `weak` |
//! | OC007 | `method-selector-case` | method | Selector fragments must start lowercase |
//! | OC008 | `parameter-name-case` | method | Parameter names must start lowercase |
//!
//! ## Usage
//!
//! ```ignore
//! use objc_lint_core::{Config, LintResult};
//! use objc_lint_rules::standard_checker;
//!
//! let checker = standard_checker(Config::default());
//! let mut result = LintResult::new();
//! checker.check_all(declarations, &mut result);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod method_selector_case;
mod parameter_name_case;
mod presets;
mod property_delegate_weak;
mod property_name_case;
mod property_prefer_sized_int;
mod property_string_ownership;
mod type_name_case;
mod type_name_underscore;

pub use method_selector_case::MethodSelectorCase;
pub use parameter_name_case::ParameterNameCase;
pub use presets::{all_rules, standard_checker};
pub use property_delegate_weak::PropertyDelegateWeak;
pub use property_name_case::PropertyNameCase;
pub use property_prefer_sized_int::PropertyPreferSizedInt;
pub use property_string_ownership::PropertyStringOwnership;
pub use type_name_case::TypeNameCase;
pub use type_name_underscore::TypeNameUnderscore;

/// Re-export core types for convenience.
pub use objc_lint_core::{Rule, Severity, Violation};
