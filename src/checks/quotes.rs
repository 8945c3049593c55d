//! Whole-text quote balance.
//!
//! A single forward scan carries one open/closed slot per quote kind. A quote
//! only toggles its own slot while no other kind is open, so a backtick inside
//! a double-quoted string is plain text. A backslash escapes the character
//! that follows it; escape state does not carry across line breaks.

use super::{RuleInfo, TextCheck};
use crate::models::{Diagnostic, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteKind {
    Double,
    Single,
    Backtick,
}

impl QuoteKind {
    const ALL: [QuoteKind; 3] = [QuoteKind::Double, QuoteKind::Single, QuoteKind::Backtick];

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '"' => Some(QuoteKind::Double),
            '\'' => Some(QuoteKind::Single),
            '`' => Some(QuoteKind::Backtick),
            _ => None,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            QuoteKind::Double => "double",
            QuoteKind::Single => "single",
            QuoteKind::Backtick => "backtick",
        }
    }

    fn as_char(self) -> char {
        match self {
            QuoteKind::Double => '"',
            QuoteKind::Single => '\'',
            QuoteKind::Backtick => '`',
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Origin {
    line: usize,
    column: usize,
}

#[derive(Debug, Default)]
struct QuoteState {
    open: [Option<Origin>; 3],
}

impl QuoteState {
    fn toggle(&mut self, kind: QuoteKind, at: Origin) {
        let other_open = QuoteKind::ALL
            .iter()
            .any(|k| *k != kind && self.open[k.slot()].is_some());
        if other_open {
            return;
        }
        let slot = &mut self.open[kind.slot()];
        *slot = if slot.is_some() { None } else { Some(at) };
    }

    fn unclosed(&self) -> impl Iterator<Item = (QuoteKind, Origin)> + '_ {
        QuoteKind::ALL
            .into_iter()
            .filter_map(|k| self.open[k.slot()].map(|o| (k, o)))
    }
}

pub struct QuoteBalance;

impl TextCheck for QuoteBalance {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            id: "unclosed-quote",
            severity: Severity::Error,
            summary: "string literal opened with \", ' or ` is never closed",
        }
    }

    fn check_text(&self, text: &str, out: &mut Vec<Diagnostic>) {
        let mut state = QuoteState::default();
        for (idx, line) in text.split('\n').enumerate() {
            let mut escaped = false;
            for (col, ch) in line.chars().enumerate() {
                if escaped {
                    escaped = false;
                    continue;
                }
                if ch == '\\' {
                    escaped = true;
                    continue;
                }
                if let Some(kind) = QuoteKind::from_char(ch) {
                    state.toggle(
                        kind,
                        Origin {
                            line: idx + 1,
                            column: col + 1,
                        },
                    );
                }
            }
        }
        for (kind, origin) in state.unclosed() {
            out.push(Diagnostic::error(
                origin.line,
                origin.column,
                format!(
                    "Unclosed {} quote ({}) starting on line {}",
                    kind.name(),
                    kind.as_char(),
                    origin.line
                ),
            ));
        }
    }
}
