//! Whole-text scale consistency advisory.

use super::{RuleInfo, TextCheck};
use crate::models::{Diagnostic, Severity};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static SCALE_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\.scale\s*\(\s*["']([^"']+)["']\s*\)"#).expect("scale call regex")
});

/// Distinct `.scale("...")` arguments in first-seen order.
pub fn distinct_scales(text: &str) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ordered: Vec<&str> = Vec::new();
    for caps in SCALE_CALL.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            if seen.insert(m.as_str()) {
                ordered.push(m.as_str());
            }
        }
    }
    ordered
}

pub struct ScaleConsistency;

impl TextCheck for ScaleConsistency {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: "scale-consistency",
            severity: Severity::Warning,
            summary: "more than one distinct .scale() value in the same source",
        }
    }

    fn check_text(&self, text: &str, out: &mut Vec<Diagnostic>) {
        let scales = distinct_scales(text);
        if scales.len() < 2 {
            return;
        }
        out.push(Diagnostic::warning(
            1,
            1,
            format!(
                "Multiple different scales detected: {}. Consider using a single scale for harmonic consistency.",
                scales.join(", ")
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        ScaleConsistency.check_text(text, &mut out);
        out
    }

    #[test]
    fn test_same_scale_repeated() {
        assert!(run(r#"a.scale("c:major") b.scale('c:major')"#).is_empty());
    }

    #[test]
    fn test_distinct_scales_listed_in_order() {
        let out = run("a.scale(\"d:minor\")\nb.scale(\"c:major\")\nc.scale(\"d:minor\")");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, Severity::Warning);
        assert!(out[0]
            .message
            .starts_with("Multiple different scales detected: d:minor, c:major."));
    }

    #[test]
    fn test_many_distinct_scales_keep_first_seen_order() {
        let text: String = (0..20_000)
            .map(|i| format!("a.scale(\"s{:07}\")\nb.scale(\"s{:07}\")\n", i, i))
            .collect();
        let scales = distinct_scales(&text);
        assert_eq!(scales.len(), 20_000);
        assert_eq!(scales[0], "s0000000");
        assert_eq!(scales[19_999], "s0019999");
        let out = run(&text);
        assert_eq!(out.len(), 1);
        assert!(out[0].message.contains("s0000000, s0000001, s0000002"));
    }

    #[test]
    fn test_pattern_scale_argument_is_a_single_value() {
        assert_eq!(distinct_scales(r#"n("0 2").scale("<c:major a:minor>")"#).len(), 1);
        assert!(distinct_scales("n(0).scale(myScale)").is_empty());
    }
}
