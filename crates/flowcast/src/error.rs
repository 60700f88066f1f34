//! Error types for Flowcast operations.
//!
//! [`FlowcastError`] wraps every failure the facade can report. Parsing and
//! narration are total at the [`FlowchartGenerator`](crate::FlowchartGenerator)
//! boundary, so the `Parse` and `Payload` variants only reach callers that use
//! the fallible stages directly.

use std::io;

use thiserror::Error;

use flowcast_parser::error::ParseError;

use crate::{jobs::JobError, speech::SpeechError};

/// The main error type for Flowcast operations.
#[derive(Debug, Error)]
pub enum FlowcastError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A built chain broke its invariants. Carries the prompt for reporting.
    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Invalid narration payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),

    #[error("Speech error: {0}")]
    Speech(#[from] SpeechError),

    #[error("Job error: {0}")]
    Job(#[from] JobError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl FlowcastError {
    /// Create a new `Parse` error with the prompt it was built from.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
