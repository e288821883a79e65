//! Utility functions for rule implementations.

pub mod ident;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use ident::{char_at, lowercase_at, strip_underscores, uppercase_first};
