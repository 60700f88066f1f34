//! Severity levels for build diagnostics.

use std::fmt;

/// How serious a diagnostic is.
///
/// An [`Severity::Error`] aborts the build; the facade then substitutes the
/// default flowchart. A [`Severity::Warning`] is logged and the build goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The step list or the built chain is unusable.
    Error,
    /// The input was accepted but probably not what the author meant.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}
