//! Renders a [`FlowcastError`] as miette reports.
//!
//! A [`flowcast_parser::error::ParseError`] may hold several diagnostics;
//! each becomes its own [`Report`] with the prompt attached as source code.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, Severity, SourceCode};

use flowcast::FlowcastError;
use flowcast_parser::error::Diagnostic;

/// One renderable problem.
#[derive(Debug)]
pub struct Report<'a> {
    message: String,
    code: Option<String>,
    severity: Severity,
    help: Option<String>,
    prompt: Option<&'a str>,
    cause: Option<&'a FlowcastError>,
}

impl<'a> Report<'a> {
    /// Report for a single parser diagnostic. The step index, if any, is
    /// appended to the message.
    pub fn from_diagnostic(diag: &Diagnostic, prompt: &'a str) -> Self {
        let message = match diag.step() {
            Some(step) => format!("{} (step {step})", diag.message()),
            None => diag.message().to_string(),
        };
        let severity = if diag.severity().is_error() {
            Severity::Error
        } else {
            Severity::Warning
        };

        Self {
            message,
            code: diag.code().map(|code| code.to_string()),
            severity,
            help: diag.help().map(str::to_string),
            prompt: Some(prompt),
            cause: None,
        }
    }

    /// Report for an error that carries no diagnostics.
    pub fn from_error(err: &'a FlowcastError) -> Self {
        let code = match err {
            FlowcastError::Io(_) => "flowcast::io",
            FlowcastError::Parse { .. } => "flowcast::parse",
            FlowcastError::Payload(_) => "flowcast::payload",
            FlowcastError::InvalidPrompt(_) => "flowcast::prompt",
            FlowcastError::Speech(_) => "flowcast::speech",
            FlowcastError::Job(_) => "flowcast::job",
            FlowcastError::Config(_) => "flowcast::config",
        };
        let help = match err {
            FlowcastError::InvalidPrompt(_) => Some("pass a non-empty prompt or a file with --input"),
            FlowcastError::Config(_) => Some("check the file given with --config or flowcast/config.toml"),
            _ => None,
        };

        Self {
            message: err.to_string(),
            code: Some(code.to_string()),
            severity: Severity::Error,
            help: help.map(str::to_string),
            prompt: None,
            cause: Some(err),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Report<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.and_then(|err| err.source())
    }
}

impl MietteDiagnostic for Report<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.code
            .as_deref()
            .map(|code| Box::new(code) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_deref()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.prompt.as_ref().map(|prompt| prompt as &dyn SourceCode)
    }
}

/// Splits `err` into reports.
///
/// [`FlowcastError::Parse`] yields one report per diagnostic; every other
/// variant yields exactly one.
pub fn to_reports(err: &FlowcastError) -> Vec<Report<'_>> {
    match err {
        FlowcastError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Report::from_diagnostic(diag, src))
            .collect(),
        _ => vec![Report::from_error(err)],
    }
}

#[cfg(test)]
mod tests {
    use flowcast_parser::error::{ErrorCode, ParseError};

    use super::*;

    fn code_of(report: &Report<'_>) -> Option<String> {
        report.code().map(|code| code.to_string())
    }

    #[test]
    fn test_one_report_per_diagnostic() {
        let diags = vec![
            Diagnostic::error("first node is not a start node")
                .with_code(ErrorCode::E200)
                .with_step(0),
            Diagnostic::error("expected 2 edges for 3 nodes, found 1").with_code(ErrorCode::E202),
        ];
        let err = FlowcastError::new_parse_error(ParseError::from(diags), "a -> b -> c");

        let reports = to_reports(&err);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].message(), "first node is not a start node (step 0)");
        assert_eq!(reports[1].to_string(), "expected 2 edges for 3 nodes, found 1");
        assert_eq!(code_of(&reports[0]), Some("E200".to_string()));
        assert!(reports[0].source_code().is_some());
    }

    #[test]
    fn test_invalid_prompt_report() {
        let err = FlowcastError::InvalidPrompt("prompt is empty".to_string());

        let reports = to_reports(&err);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].message(), "Invalid prompt: prompt is empty");
        assert_eq!(code_of(&reports[0]), Some("flowcast::prompt".to_string()));
        assert!(reports[0].help().is_some());
        assert!(reports[0].source_code().is_none());
    }

    #[test]
    fn test_io_report_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err = FlowcastError::from(io);

        let reports = to_reports(&err);
        assert_eq!(code_of(&reports[0]), Some("flowcast::io".to_string()));
        assert!(reports[0].source().is_some());
        assert!(reports[0].help().is_none());
    }

    #[test]
    fn test_warning_severity() {
        let diag = Diagnostic::warning("step 1 is a decision with a single outgoing edge").with_step(1);
        let report = Report::from_diagnostic(&diag, "");
        assert_eq!(report.severity(), Some(Severity::Warning));
        assert_eq!(code_of(&report), None);
    }
}
