//! Error codes for the Flowcast diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Step list errors
//! - `E2xx` - Chain validation errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Step List Errors (E1xx)
    // =========================================================================
    /// Too few steps.
    ///
    /// A chain needs at least a start, one step and an end.
    E100,

    /// Blank step.
    ///
    /// A step contains no text after trimming.
    E101,

    // =========================================================================
    // Chain Validation Errors (E2xx)
    // =========================================================================
    /// Misplaced start node.
    ///
    /// The first node is not a start node, or a start node appears elsewhere.
    E200,

    /// Misplaced end node.
    ///
    /// The last node is not an end node, or an end node appears elsewhere.
    E201,

    /// Broken chain.
    ///
    /// Edges do not connect each node to its successor exactly once.
    E202,

    /// Duplicate node id.
    E203,

    /// Invalid node color.
    ///
    /// A node's color hint is not a CSS color.
    E204,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "too few steps",
            ErrorCode::E101 => "blank step",
            ErrorCode::E200 => "misplaced start node",
            ErrorCode::E201 => "misplaced end node",
            ErrorCode::E202 => "broken chain",
            ErrorCode::E203 => "duplicate node id",
            ErrorCode::E204 => "invalid node color",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E202.to_string(), "E202");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E100.description(), "too few steps");
        assert_eq!(ErrorCode::E203.description(), "duplicate node id");
    }
}
