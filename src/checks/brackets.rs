//! Whole-text bracket balance over comment-stripped source.

use super::{RuleInfo, TextCheck};
use crate::models::{Diagnostic, Severity};

struct BracketKind {
    name: &'static str,
    open: char,
    close: char,
}

const KINDS: [BracketKind; 3] = [
    BracketKind {
        name: "parentheses",
        open: '(',
        close: ')',
    },
    BracketKind {
        name: "brackets",
        open: '[',
        close: ']',
    },
    BracketKind {
        name: "braces",
        open: '{',
        close: '}',
    },
];

/// Source with everything from `//` to end of line removed.
///
/// Strings are not recognised, so a `//` inside a literal also starts a comment.
fn strip_line_comments(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.find("//").map_or(line, |i| &line[..i]))
}

pub struct BracketBalance;

impl TextCheck for BracketBalance {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: "unbalanced-brackets",
            severity: Severity::Error,
            summary: "(), [] or {} have missing or extra closing tokens",
        }
    }

    fn check_text(&self, text: &str, out: &mut Vec<Diagnostic>) {
        let mut depth = [0i64; 3];
        for ch in strip_line_comments(text).flat_map(str::chars) {
            for (i, kind) in KINDS.iter().enumerate() {
                if ch == kind.open {
                    depth[i] += 1;
                } else if ch == kind.close {
                    depth[i] -= 1;
                }
            }
        }
        for (kind, net) in KINDS.iter().zip(depth) {
            if net == 0 {
                continue;
            }
            let side = if net > 0 { "missing" } else { "extra" };
            out.push(Diagnostic::error(
                1,
                1,
                format!(
                    "Unbalanced {}: {} {} closing \"{}\"",
                    kind.name,
                    side,
                    net.unsigned_abs(),
                    kind.close
                ),
            ));
        }
    }
}
