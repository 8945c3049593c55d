//! Lint entry points.
//!
//! `lint` is the pure analyzer: text in, `LintResult` out, no I/O and no
//! state between calls. `run_lint` applies it to files on disk in parallel
//! and produces a `LintReport` for the CLI printers.

use crate::checks::run_checks;
use crate::error::{Error, Result};
use crate::models::{Diagnostic, FileReport, LintReport, LintResult};
use glob::glob;
use rayon::prelude::*;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Name used for source read from standard input.
pub const STDIN_NAME: &str = "-";

/// Analyze `source` with every registered pass.
///
/// Never fails on input content; malformed text is reported through
/// diagnostics.
pub fn lint(source: &str) -> LintResult {
    let diagnostics = run_checks(source);
    let result = LintResult::from_diagnostics(diagnostics);
    log::debug!(
        "linted {} bytes: ok={} diagnostics={}",
        source.len(),
        result.ok,
        result.diagnostics.len()
    );
    result
}

/// Lint already-loaded source under a display name.
pub fn lint_named(name: &str, source: &str) -> FileReport {
    FileReport {
        file: name.to_string(),
        result: lint(source),
    }
}

/// Read a source file, or standard input when `spec` is `-`.
pub fn read_source(spec: &str) -> Result<String> {
    if spec == STDIN_NAME {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| Error::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        return Ok(buf);
    }
    fs::read_to_string(spec).map_err(|source| Error::Io {
        path: PathBuf::from(spec),
        source,
    })
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand patterns relative to `base` into a sorted, de-duplicated file list.
///
/// Plain paths are taken as-is (missing files surface later as read errors);
/// glob patterns contribute only the files they match.
pub fn collect_targets(base: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut targets: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let joined = base.join(pat);
        if !is_glob(pat) {
            targets.push(joined);
            continue;
        }
        let pattern = joined.to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|source| Error::Pattern {
            pattern: pat.clone(),
            source,
        })?;
        let before = targets.len();
        for entry in entries {
            match entry {
                Ok(p) if p.is_file() => targets.push(p),
                Ok(_) => {}
                Err(e) => log::warn!("skipping unreadable path: {}", e),
            }
        }
        log::debug!("pattern '{}' matched {} files", pat, targets.len() - before);
    }
    targets.sort();
    targets.dedup();
    Ok(targets)
}

/// Lint each target file in parallel.
///
/// File names in the report are shown relative to `base` and the report is
/// ordered by file name. A file that cannot be read (missing, or not UTF-8)
/// is reported as a single error entry; the remaining files are still linted.
pub fn run_lint(base: &Path, targets: &[PathBuf]) -> LintReport {
    let mut files: Vec<FileReport> = targets
        .par_iter()
        .map(|path| {
            let shown = pathdiff::diff_paths(path, base).unwrap_or_else(|| path.clone());
            let name = shown.to_string_lossy();
            match fs::read_to_string(path) {
                Ok(source) => lint_named(&name, &source),
                Err(e) => {
                    log::warn!("failed to read {}: {}", path.display(), e);
                    unreadable(&name, &e)
                }
            }
        })
        .collect();
    files.sort_by(|a, b| a.file.cmp(&b.file));
    log::debug!("linted {} files", files.len());
    LintReport::new(files)
}

fn unreadable(name: &str, err: &std::io::Error) -> FileReport {
    FileReport {
        file: name.to_string(),
        result: LintResult::from_diagnostics(vec![Diagnostic::error(
            1,
            1,
            format!("File could not be read: {}", err),
        )]),
    }
}
