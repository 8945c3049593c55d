//! Multi-file report types used by the CLI printers.

use super::{LintResult, Severity};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
/// Lint outcome for one input file (or `-` for stdin).
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub result: LintResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers and exit-code decisions.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub files: usize,
}

#[derive(Debug, Clone, Serialize)]
/// Lint results container.
pub struct LintReport {
    pub files: Vec<FileReport>,
    pub summary: Summary,
}

impl LintReport {
    pub fn new(files: Vec<FileReport>) -> Self {
        let mut summary = Summary {
            files: files.len(),
            ..Summary::default()
        };
        for d in files.iter().flat_map(|f| f.result.diagnostics.iter()) {
            match d.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
            }
        }
        LintReport { files, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Diagnostic;

    #[test]
    fn test_summary_counts_across_files() {
        let report = LintReport::new(vec![
            FileReport {
                file: "a.strudel".into(),
                result: LintResult::from_diagnostics(vec![Diagnostic::error(1, 1, "x")]),
            },
            FileReport {
                file: "b.strudel".into(),
                result: LintResult::from_diagnostics(vec![
                    Diagnostic::warning(1, 1, "y"),
                    Diagnostic::warning(2, 1, "z"),
                ]),
            },
        ]);
        assert_eq!(
            report.summary,
            Summary {
                errors: 1,
                warnings: 2,
                files: 2
            }
        );
    }
}
