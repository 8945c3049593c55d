//! Output rendering for lint results and the rule catalog.
//!
//! `format_diagnostics` is the plain renderer shared with the guards. The
//! CLI printers support `human` (default) and `json` outputs; human output
//! is colored unless `NO_COLOR` is set.

use crate::checks::RuleInfo;
use crate::models::{LintReport, LintResult, Severity};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

/// Rendered by `format_diagnostics` when there is nothing to report.
pub const NO_ISSUES: &str = "No issues found.";

/// Render each diagnostic as `[SEVERITY] Line N: message`, in order.
pub fn format_diagnostics(result: &LintResult) -> String {
    if result.is_empty() {
        return NO_ISSUES.to_string();
    }
    result
        .diagnostics
        .iter()
        .map(|d| {
            format!(
                "[{}] Line {}: {}",
                d.severity.as_str().to_uppercase(),
                d.line,
                d.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors("human") {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Human lint listing, one line per diagnostic plus a summary line.
pub fn render_lint_human(report: &LintReport, color: bool) -> String {
    let mut lines: Vec<String> = Vec::new();
    for f in &report.files {
        for d in &f.result.diagnostics {
            let (icon, sev) = match d.severity {
                Severity::Error if color => {
                    ("✖".red().to_string(), "⟦error⟧".red().bold().to_string())
                }
                Severity::Warning if color => {
                    ("▲".yellow().to_string(), "⟦warn⟧".yellow().bold().to_string())
                }
                Severity::Error => ("✖".to_string(), "⟦error⟧".to_string()),
                Severity::Warning => ("▲".to_string(), "⟦warn⟧".to_string()),
            };
            let loc = format!("{}:{}:{}", f.file, d.line, d.column);
            let loc = if color { loc.bold().to_string() } else { loc };
            lines.push(format!("{} {} {} — {}", icon, sev, loc, d.message));
        }
    }
    let summary = format!(
        "— Summary — errors={} warnings={} files={}",
        report.summary.errors, report.summary.warnings, report.summary.files
    );
    lines.push(if color {
        summary.bold().to_string()
    } else {
        summary
    });
    lines.join("\n")
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(report: &LintReport) -> JsonVal {
    json!({
        "files": report.files,
        "summary": report.summary,
    })
}

/// Print lint results in the requested format.
pub fn print_lint(report: &LintReport, output: &str) {
    match output {
        "json" => println!("{:#}", compose_lint_json(report)),
        _ => println!("{}", render_lint_human(report, use_colors(output))),
    }
}

pub fn compose_rules_json(rules: &[RuleInfo]) -> JsonVal {
    let items: Vec<_> = rules
        .iter()
        .map(|r| json!({"id": r.id, "severity": r.severity, "summary": r.summary}))
        .collect();
    json!({ "rules": items })
}

/// Print the rule catalog.
pub fn print_rules(rules: &[RuleInfo], output: &str) {
    match output {
        "json" => println!("{:#}", compose_rules_json(rules)),
        _ => {
            let color = use_colors(output);
            for r in rules {
                let sev = format!("{:<7}", r.severity.as_str());
                let sev = match (color, r.severity) {
                    (true, Severity::Error) => sev.red().to_string(),
                    (true, Severity::Warning) => sev.yellow().to_string(),
                    (false, _) => sev,
                };
                let id = format!("{:<20}", r.id);
                let id = if color { id.bold().to_string() } else { id };
                println!("{} {} {}", id, sev, r.summary);
            }
        }
    }
}
