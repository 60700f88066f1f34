//! The core diagnostic type for the Flowcast error system.

use std::fmt;

use crate::error::{Severity, error_code::ErrorCode};

/// A diagnostic message about a step list or a built chain.
///
/// Diagnostics carry:
/// - A severity level
/// - An optional error code
/// - A primary message describing the issue
/// - The index of the offending step, when one can be named
/// - Optional help text
///
/// # Example
///
/// ```text
/// error[E101]: step 1 is blank
///    = step: 1
///    = help: remove empty fragments before building
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    step: Option<usize>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use flowcast_parser::error::{Diagnostic, ErrorCode};
    ///
    /// let diag = Diagnostic::error("need at least 3 steps, found 2")
    ///     .with_code(ErrorCode::E100)
    ///     .with_help("separate steps with `->`");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the index of the offending step, if any.
    pub fn step(&self) -> Option<usize> {
        self.step
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Point the diagnostic at a step.
    pub fn with_step(mut self, index: usize) -> Self {
        self.step = Some(index);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            step: None,
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E100]: message" or "warning: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_defaults() {
        let diag = Diagnostic::error("test error");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.step().is_none());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::warning("step 3 repeats step 2")
            .with_code(ErrorCode::E101)
            .with_step(3)
            .with_help("merge the steps");

        assert!(diag.severity().is_warning());
        assert_eq!(diag.code(), Some(ErrorCode::E101));
        assert_eq!(diag.step(), Some(3));
        assert_eq!(diag.help(), Some("merge the steps"));
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("need at least 3 steps, found 1").with_code(ErrorCode::E100);
        assert_eq!(diag.to_string(), "error[E100]: need at least 3 steps, found 1");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::warning("prompt was truncated");
        assert_eq!(diag.to_string(), "warning: prompt was truncated");
    }
}
