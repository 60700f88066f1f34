//! Error and diagnostic system for the Flowcast parser.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Severity levels
//! - A diagnostic collector for accumulating every invariant violation
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning with an optional error code, the index of the
//! offending step, and help text. Multiple diagnostics are wrapped in
//! [`ParseError`] for returning from the build.
//!
//! # Example
//!
//! ```
//! # use flowcast_parser::error::{Diagnostic, ErrorCode};
//!
//! let diag = Diagnostic::error("step 2 is blank")
//!     .with_code(ErrorCode::E101)
//!     .with_step(2)
//!     .with_help("remove empty fragments before building");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
pub use severity::Severity;
