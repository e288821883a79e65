//! Separates user-owned source files from toolchain-owned ones.

use std::path::{Path, PathBuf};

/// Default root of the toolchain's bundled SDKs and headers.
pub const DEFAULT_SYSTEM_PREFIX: &str = "/Applications/Xcode.app/";

/// Decides whether a file belongs to code the user can edit.
///
/// Files under the configured system prefix (the toolchain's SDK and
/// resource directories) are never checked, and neither are declarations
/// without a file (implicit or synthesized declarations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginFilter {
    system_prefix: String,
}

impl Default for OriginFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PREFIX)
    }
}

impl OriginFilter {
    /// Creates a filter treating files under `system_prefix` as toolchain code.
    ///
    /// An empty prefix disables prefix filtering.
    #[must_use]
    pub fn new(system_prefix: impl Into<PathBuf>) -> Self {
        Self {
            system_prefix: system_prefix.into().to_string_lossy().into_owned(),
        }
    }

    /// Returns the configured system prefix.
    #[must_use]
    pub fn system_prefix(&self) -> &str {
        &self.system_prefix
    }

    /// Returns true if `path` is user code that should be checked.
    #[must_use]
    pub fn is_user_code(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        if path.is_empty() {
            return false;
        }
        if !self.system_prefix.is_empty() && path.starts_with(self.system_prefix.as_str()) {
            return false;
        }
        true
    }
}
