//! Gates used by callers before running or publishing source.
//!
//! - `ensure_runnable`: pre-execution guard. Only error diagnostics are
//!   listed in the failure reason.
//! - `ensure_publishable`: publish gate. The failure carries the full
//!   `format_diagnostics` report, warnings included.
//! - `validation_message`: text shown for a manual validate action.

use crate::lint::lint;
use crate::models::LintResult;
use crate::output::format_diagnostics;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// Playback must not start
    #[error("Code validation failed:\n{reasons}")]
    Blocked { reasons: String, result: LintResult },

    /// Submission to the shared catalog must not proceed
    #[error("Please fix the lint errors before uploading\n{report}")]
    PublishBlocked { report: String, result: LintResult },
}

impl GuardError {
    pub fn result(&self) -> &LintResult {
        match self {
            GuardError::Blocked { result, .. } | GuardError::PublishBlocked { result, .. } => {
                result
            }
        }
    }
}

/// `Line N: message` for each error diagnostic, one per line.
pub fn error_reasons(result: &LintResult) -> String {
    result
        .errors()
        .map(|d| format!("Line {}: {}", d.line, d.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lint `source` and refuse it for execution when any error is present.
pub fn ensure_runnable(source: &str) -> Result<LintResult, GuardError> {
    let result = lint(source);
    if result.ok {
        return Ok(result);
    }
    log::debug!("execution blocked: {} errors", result.errors().count());
    Err(GuardError::Blocked {
        reasons: error_reasons(&result),
        result,
    })
}

/// Lint `source` and refuse it for publication when any error is present.
pub fn ensure_publishable(source: &str) -> Result<LintResult, GuardError> {
    let result = lint(source);
    if result.ok {
        return Ok(result);
    }
    log::debug!("publish blocked: {} errors", result.errors().count());
    Err(GuardError::PublishBlocked {
        report: format_diagnostics(&result),
        result,
    })
}

pub fn validation_message(result: &LintResult) -> String {
    format_diagnostics(result)
}
