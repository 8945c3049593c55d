//! strudel-lint core library.
//!
//! A single-pass, rule-based static analyzer for Strudel live-coding
//! pattern source. It scans text line by line and as a whole, and reports
//! diagnostics before the code is handed to the audio runtime. It does not
//! parse the pattern language or evaluate anything.
//!
//! High-level modules:
//! - `checks`: The rule passes, their fixed tables, and the rule registry.
//! - `lint`: The `lint` entry point and the parallel multi-file runner.
//! - `guard`: Pre-execution and publish gates built on `lint`.
//! - `models`: Diagnostic, result, and report types.
//! - `output`: `format_diagnostics` and the human/JSON printers.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `error`: Errors for file, config, and pattern handling.
//!
//! ```
//! let result = strudel_lint::lint(r#"s("sawtooth")"#);
//! assert!(!result.ok);
//! println!("{}", strudel_lint::format_diagnostics(&result));
//! ```
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod lint;
pub mod models;
pub mod output;

pub use lint::lint;
pub use models::{Diagnostic, LintResult, Severity};
pub use output::format_diagnostics;
