//! Rule passes and their fixed tables.
//!
//! Every pass appends to one shared diagnostic sink. Passes come in two
//! shapes:
//! - `LineCheck`: runs once per physical line, after blank lines and `//`
//!   comment lines have been filtered out.
//! - `TextCheck`: runs once over the whole source text.
//!
//! The registries below fix the execution order, which is also the order
//! diagnostics are reported in. Adding a rule means adding a descriptor to
//! one of the registries; `run_checks` does not change.

pub mod brackets;
pub mod line;
pub mod quotes;
pub mod scale;

use crate::models::{Diagnostic, Severity};

/// Waveform and noise generators that must be played with `.s()`, never `s()`.
pub const FORBIDDEN_SAMPLE_SYNTHS: &[&str] = &[
    "saw", "sawtooth", "square", "sine", "triangle", "pulse", "noise",
];

/// Recommended numeric range for an effect method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
}

pub const PARAM_RANGES: &[ParamRange] = &[
    ParamRange {
        name: "distort",
        min: 0.0,
        max: 0.15,
    },
    ParamRange {
        name: "distortion",
        min: 0.0,
        max: 0.15,
    },
    ParamRange {
        name: "resonance",
        min: 0.2,
        max: 0.8,
    },
    ParamRange {
        name: "room",
        min: 0.0,
        max: 0.7,
    },
    ParamRange {
        name: "lpf",
        min: 200.0,
        max: 3000.0,
    },
];

/// Host-language construct that reaches outside the pattern sandbox.
#[derive(Debug, Clone, Copy)]
pub struct EscapeHatch {
    pub label: &'static str,
    pub pattern: &'static str,
}

pub const DANGEROUS_PATTERNS: &[EscapeHatch] = &[
    EscapeHatch {
        label: "import",
        pattern: r"import\s+",
    },
    EscapeHatch {
        label: "require(",
        pattern: r"require\s*\(",
    },
    EscapeHatch {
        label: "eval(",
        pattern: r"eval\s*\(",
    },
    EscapeHatch {
        label: "Function(",
        pattern: r"Function\s*\(",
    },
    EscapeHatch {
        label: "window.",
        pattern: r"window\.",
    },
    EscapeHatch {
        label: "document.",
        pattern: r"document\.",
    },
    EscapeHatch {
        label: "fetch(",
        pattern: r"fetch\s*\(",
    },
    EscapeHatch {
        label: "XMLHttpRequest",
        pattern: r"XMLHttpRequest",
    },
];

/// Catalog entry describing one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    pub id: &'static str,
    pub severity: Severity,
    pub summary: &'static str,
}

/// One physical line of source with its 1-based number.
#[derive(Debug, Clone, Copy)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl SourceLine<'_> {
    /// Blank lines and `//` comment lines carry no content to check.
    pub fn is_skipped(&self) -> bool {
        let trimmed = self.text.trim();
        trimmed.is_empty() || trimmed.starts_with("//")
    }

    /// 1-based character column for a byte offset into this line.
    pub fn column_at(&self, byte: usize) -> usize {
        column_at(self.text, byte)
    }
}

pub trait LineCheck {
    fn info(&self) -> RuleInfo;
    fn check_line(&self, line: &SourceLine<'_>, out: &mut Vec<Diagnostic>);
}

pub trait TextCheck {
    fn info(&self) -> RuleInfo;
    fn check_text(&self, text: &str, out: &mut Vec<Diagnostic>);
}

pub const LINE_CHECKS: &[&dyn LineCheck] = &[
    &line::SynthAsSample,
    &line::UnsafeEscape,
    &line::ParamRangeAdvisory,
    &line::DirectPlay,
];

pub const TEXT_CHECKS: &[&dyn TextCheck] = &[
    &quotes::QuoteBalance,
    &brackets::BracketBalance,
    &scale::ScaleConsistency,
];

/// Every registered rule in execution order.
pub fn catalog() -> Vec<RuleInfo> {
    LINE_CHECKS
        .iter()
        .map(|c| c.info())
        .chain(TEXT_CHECKS.iter().map(|c| c.info()))
        .collect()
}

/// Run all registered passes over `text`, per-line passes first.
pub fn run_checks(text: &str) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    for (idx, raw) in text.split('\n').enumerate() {
        let line = SourceLine {
            number: idx + 1,
            text: raw,
        };
        if line.is_skipped() {
            continue;
        }
        for check in LINE_CHECKS {
            check.check_line(&line, &mut out);
        }
    }
    let per_line = out.len();
    for check in TEXT_CHECKS {
        check.check_text(text, &mut out);
    }
    log::trace!(
        "checks done: {} line diagnostics, {} text diagnostics",
        per_line,
        out.len() - per_line
    );
    out
}

pub(crate) fn column_at(text: &str, byte: usize) -> usize {
    text.get(..byte).map_or(1, |s| s.chars().count() + 1)
}
