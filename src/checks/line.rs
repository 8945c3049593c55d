//! Per-line passes: synth/sample confusion, sandbox escapes, effect
//! parameter ranges, and direct `.play()` calls.

use super::{
    LineCheck, ParamRange, RuleInfo, SourceLine, DANGEROUS_PATTERNS, FORBIDDEN_SAMPLE_SYNTHS,
    PARAM_RANGES,
};
use crate::models::{Diagnostic, Severity};
use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

// Standalone `s("...")`, i.e. not `.s(` and not the tail of an identifier.
static SAMPLE_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:^|[^.A-Za-z0-9_])(?P<call>s\s*\(\s*["'](?P<arg>[^"']+)["']\s*\))"#)
        .expect("sample call regex")
});

static ESCAPE_HATCHES: Lazy<(RegexSet, Vec<Regex>)> = Lazy::new(|| {
    let patterns: Vec<&str> = DANGEROUS_PATTERNS.iter().map(|h| h.pattern).collect();
    let set = RegexSet::new(&patterns).expect("escape hatch set");
    let each = patterns
        .iter()
        .map(|p| Regex::new(p).expect("escape hatch regex"))
        .collect();
    (set, each)
});

static PARAM_CALLS: Lazy<Vec<(ParamRange, Regex)>> = Lazy::new(|| {
    PARAM_RANGES
        .iter()
        .map(|r| {
            let re = Regex::new(&format!(
                r"\.{}\s*\(\s*([0-9.]+)\s*\)",
                regex::escape(r.name)
            ))
            .expect("param range regex");
            (*r, re)
        })
        .collect()
});

static PLAY_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.play\s*\(").expect("play regex"));

/// Lines mentioning this are assumed to inspect playback state and are exempt
/// from the direct-play rule.
const PLAYBACK_STATE_MARKER: &str = "isPlaying";

pub struct SynthAsSample;

impl LineCheck for SynthAsSample {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: "synth-as-sample",
            severity: Severity::Error,
            summary: "s(\"<waveform>\") plays a sample; waveforms need .s() on a note pattern",
        }
    }

    fn check_line(&self, line: &SourceLine<'_>, out: &mut Vec<Diagnostic>) {
        let Some(caps) = SAMPLE_CALL.captures(line.text) else {
            return;
        };
        let (Some(call), Some(arg)) = (caps.name("call"), caps.name("arg")) else {
            return;
        };
        let sample = arg.as_str().to_lowercase();
        for root in FORBIDDEN_SAMPLE_SYNTHS {
            let matched = sample == *root
                || sample
                    .strip_prefix(*root)
                    .is_some_and(|rest| rest.starts_with('/'));
            if matched {
                out.push(Diagnostic::error(
                    line.number,
                    line.column_at(call.start()),
                    format!(
                        "s(\"{arg}\") is invalid. \"{root}\" is a synth waveform, not a sample. \
                         Use n() or note() with .s(\"{root}\") for synths.",
                        arg = arg.as_str(),
                    ),
                ));
            }
        }
    }
}

pub struct UnsafeEscape;

impl LineCheck for UnsafeEscape {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: "unsafe-escape",
            severity: Severity::Error,
            summary: "imports, eval, Function, fetch and browser globals are not allowed",
        }
    }

    fn check_line(&self, line: &SourceLine<'_>, out: &mut Vec<Diagnostic>) {
        let (set, each) = &*ESCAPE_HATCHES;
        // First table entry wins; one diagnostic per line.
        let Some(idx) = set.matches(line.text).iter().next() else {
            return;
        };
        let start = each[idx].find(line.text).map_or(0, |m| m.start());
        out.push(Diagnostic::error(
            line.number,
            line.column_at(start),
            format!(
                "Potentially unsafe code detected ({}). JavaScript imports and browser APIs are not allowed.",
                DANGEROUS_PATTERNS[idx].label
            ),
        ));
    }
}

pub struct ParamRangeAdvisory;

impl LineCheck for ParamRangeAdvisory {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: "param-range",
            severity: Severity::Warning,
            summary: "distort, resonance, room and lpf literals outside their recommended range",
        }
    }

    fn check_line(&self, line: &SourceLine<'_>, out: &mut Vec<Diagnostic>) {
        for (range, re) in PARAM_CALLS.iter() {
            let Some(caps) = re.captures(line.text) else {
                continue;
            };
            let (Some(call), Some(lit)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let Ok(value) = lit.as_str().parse::<f64>() else {
                continue;
            };
            let message = if value < range.min {
                format!(
                    ".{}({}) is below recommended minimum of {}",
                    range.name, value, range.min
                )
            } else if value > range.max {
                format!(
                    ".{}({}) exceeds recommended maximum of {}",
                    range.name, value, range.max
                )
            } else {
                continue;
            };
            out.push(Diagnostic::warning(
                line.number,
                line.column_at(call.start()),
                message,
            ));
        }
    }
}

pub struct DirectPlay;

impl LineCheck for DirectPlay {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: "direct-play",
            severity: Severity::Error,
            summary: ".play() is reserved for the engine's execute trigger",
        }
    }

    fn check_line(&self, line: &SourceLine<'_>, out: &mut Vec<Diagnostic>) {
        if !PLAY_CALL.is_match(line.text) || line.text.contains(PLAYBACK_STATE_MARKER) {
            return;
        }
        let start = line.text.find(".play").unwrap_or(0);
        out.push(Diagnostic::error(
            line.number,
            line.column_at(start),
            ".play() should not be called directly. Use the Execute button instead.",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(check: &dyn LineCheck, text: &str) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        check.check_line(&SourceLine { number: 1, text }, &mut out);
        out
    }

    #[test]
    fn test_synth_as_sample_flags_function_call() {
        let out = run(&SynthAsSample, r#"s("sawtooth")"#);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].severity, Severity::Error);
        assert_eq!(out[0].column, 1);
        assert!(out[0].message.contains("\"sawtooth\" is a synth waveform"));
    }

    #[test]
    fn test_synth_as_sample_ignores_method_call() {
        assert!(run(&SynthAsSample, r#"n("0").s("sawtooth")"#).is_empty());
        assert!(run(&SynthAsSample, r#"bass("saw")"#).is_empty());
    }

    #[test]
    fn test_synth_as_sample_case_and_slash_suffix() {
        let out = run(&SynthAsSample, r#"stack(s('SAW/2'))"#);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].column, 7);
        assert!(out[0].message.starts_with("s(\"SAW/2\") is invalid. \"saw\""));
        assert!(run(&SynthAsSample, r#"s("sawbones")"#).is_empty());
        assert!(run(&SynthAsSample, r#"s("bd sd")"#).is_empty());
    }

    #[test]
    fn test_synth_as_sample_skips_method_then_finds_standalone() {
        let out = run(&SynthAsSample, r#"x.s("bd") s("noise")"#);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].column, 11);
    }

    #[test]
    fn test_unsafe_escape_one_per_line() {
        let out = run(&UnsafeEscape, r#"fetch("x"); eval("1"); window.foo"#);
        assert_eq!(out.len(), 1);
        assert!(out[0].message.contains("(eval(")); // table order, not position
        assert_eq!(out[0].column, 13);
    }

    #[test]
    fn test_unsafe_escape_variants() {
        for src in [
            "import x from \"y\"",
            "const m = require ('m')",
            "new Function('a')",
            "document.body",
            "new XMLHttpRequest()",
        ] {
            assert_eq!(run(&UnsafeEscape, src).len(), 1, "{src}");
        }
        assert!(run(&UnsafeEscape, "s(\"bd\").evaluate").is_empty());
    }

    #[test]
    fn test_param_range_above_and_below() {
        let out = run(&ParamRangeAdvisory, "x.lpf(5000).room(0.9).resonance(0.1)");
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|d| d.severity == Severity::Warning));
        // table order: resonance, room, lpf
        assert_eq!(out[0].message, ".resonance(0.1) is below recommended minimum of 0.2");
        assert_eq!(out[1].message, ".room(0.9) exceeds recommended maximum of 0.7");
        assert_eq!(out[2].message, ".lpf(5000) exceeds recommended maximum of 3000");
        assert_eq!(out[2].column, 2);
    }

    #[test]
    fn test_param_range_in_range_and_unparsable() {
        assert!(run(&ParamRangeAdvisory, "x.lpf(1000)").is_empty());
        assert!(run(&ParamRangeAdvisory, "x.lpf(1.2.3)").is_empty());
        assert!(run(&ParamRangeAdvisory, "x.lpf(\"<200 5000>\")").is_empty());
        assert!(run(&ParamRangeAdvisory, "x.distortion(0.1)").is_empty());
        let out = run(&ParamRangeAdvisory, "x.distortion(0.5)");
        assert_eq!(out.len(), 1);
        assert!(out[0].message.starts_with(".distortion(0.5)"));
    }

    #[test]
    fn test_direct_play_flagged() {
        let out = run(&DirectPlay, r#"s("bd").play()"#);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].column, 8);
    }

    #[test]
    fn test_direct_play_suppressed_by_state_marker() {
        // Known false negative: any mention of the marker silences the rule.
        assert!(run(&DirectPlay, r#"s("bd").play() /* isPlaying */"#).is_empty());
        assert!(run(&DirectPlay, "if (!isPlaying) p.play()").is_empty());
    }
}
