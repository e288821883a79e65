//! Core types for lint violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning that should be addressed. All built-in rules report at this level.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
///
/// Points at the first byte of an identifier. When `length` is non-zero the
/// location also describes a byte span, which is how replacements bound the
/// text they overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Absolute path of the file containing the location.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    #[serde(default)]
    pub offset: usize,
    /// Length of the span in bytes.
    #[serde(default)]
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }

    /// Sets the byte offset for this location.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Returns a zero-length location `bytes` further along the same line.
    #[must_use]
    pub fn shifted(&self, bytes: usize) -> Self {
        Self {
            file: self.file.clone(),
            line: self.line,
            column: self.column + bytes,
            offset: self.offset + bytes,
            length: 0,
        }
    }

    /// Returns this location spanning `length` bytes from its start.
    #[must_use]
    pub fn spanning(&self, length: usize) -> Self {
        Self {
            length,
            ..self.clone()
        }
    }
}

/// An automatic code replacement.
///
/// `location.offset..location.offset + location.length` is exactly the text
/// that `new_text` replaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    /// Span to replace.
    pub location: Location,
    /// New text to insert.
    pub new_text: String,
}

impl Replacement {
    /// Creates a new replacement.
    #[must_use]
    pub fn new(location: Location, new_text: impl Into<String>) -> Self {
        Self {
            location,
            new_text: new_text.into(),
        }
    }

    /// Creates a replacement for the identifier `old` starting at `start`.
    #[must_use]
    pub fn identifier(start: &Location, old: &str, new_text: impl Into<String>) -> Self {
        Self::new(start.spanning(old.len()), new_text)
    }

    /// Applies this replacement to `source`, returning the edited text.
    ///
    /// Returns `None` if the span falls outside `source` or off a char boundary.
    #[must_use]
    pub fn apply(&self, source: &str) -> Option<String> {
        let start = self.location.offset;
        let end = start.checked_add(self.location.length)?;
        let head = source.get(..start)?;
        let tail = source.get(end..)?;
        Some(format!("{head}{}{tail}", self.new_text))
    }
}

/// A lint violation found during checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Rule code (e.g., "OC001").
    pub code: &'static str,
    /// Rule name (e.g., "type-name-case").
    pub rule: &'static str,
    /// Severity of this violation.
    pub severity: Severity,
    /// Primary location of the violation.
    pub location: Location,
    /// Human-readable message. Always a literal owned by the rule.
    pub message: &'static str,
    /// Optional suggested replacement resolving the violation.
    pub fix: Option<Replacement>,
}

impl Violation {
    /// Creates a new violation without a fix.
    #[must_use]
    pub fn new(
        code: &'static str,
        rule: &'static str,
        severity: Severity,
        location: Location,
        message: &'static str,
    ) -> Self {
        Self {
            code,
            rule,
            severity,
            location,
            message,
            fix: None,
        }
    }

    /// Adds a suggested replacement to this violation.
    #[must_use]
    pub fn with_fix(mut self, fix: Replacement) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(fix) = &self.fix {
            let _ = writeln!(output, "  = fix: replace with `{}`", fix.new_text);
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: `{}`)", fix.new_text)?;
        }
        Ok(())
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("[{code}] {message}")]
#[diagnostic(severity(Warning))]
pub struct ViolationDiagnostic {
    code: &'static str,
    message: &'static str,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: &'static str,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            code: v.code,
            message: v.message,
            help: v
                .fix
                .as_ref()
                .map(|fix| format!("replace with `{}`", fix.new_text)),
            span: SourceSpan::from((v.location.offset, v.location.length.max(1))),
            label_message: v.rule,
        }
    }
}

/// Result of a checking run. Also usable as a [`DiagnosticSink`](crate::DiagnosticSink).
#[derive(Debug, Default, Serialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of user-code declarations checked.
    pub declarations_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any warnings or errors.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity >= Severity::Warning)
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }
}
