//! strudel-lint CLI binary entry point.
//! Delegates to the library for linting and prints results.

use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use strudel_lint::cli::{Cli, Commands};
use strudel_lint::lint::{self, STDIN_NAME};
use strudel_lint::models::{FileReport, LintReport};
use strudel_lint::{checks, config, guard, output};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", output::error_prefix(), err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Lint {
            repo_root,
            output: out,
            deny_warnings,
            paths,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                out.as_deref(),
                deny_warnings.then_some(true),
            )?;
            let report = lint_paths(&eff, &paths)?;
            output::print_lint(&report, &eff.output);
            let failed = report.summary.errors > 0
                || (eff.deny_warnings && report.summary.warnings > 0);
            Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Commands::Check { file, publish } => {
            let source = lint::read_source(&file)?;
            let verdict = if publish {
                guard::ensure_publishable(&source)
            } else {
                guard::ensure_runnable(&source)
            };
            match verdict {
                Ok(result) => {
                    println!("{}", guard::validation_message(&result));
                    Ok(ExitCode::SUCCESS)
                }
                Err(blocked) => {
                    eprintln!("{}", blocked);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Rules { output: out } => {
            output::print_rules(&checks::catalog(), out.as_deref().unwrap_or("human"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Lint explicit paths (relative to the current dir) or, when none are
/// given, the configured patterns relative to the repo root.
fn lint_paths(eff: &config::Effective, paths: &[String]) -> anyhow::Result<LintReport> {
    if paths.is_empty() {
        let targets = lint::collect_targets(&eff.repo_root, &eff.patterns)?;
        if targets.is_empty() {
            log::warn!(
                "no files matched {:?} under {}",
                eff.patterns,
                eff.repo_root.display()
            );
        }
        return Ok(lint::run_lint(&eff.repo_root, &targets));
    }

    let (stdin, files): (Vec<String>, Vec<String>) =
        paths.iter().cloned().partition(|p| p == STDIN_NAME);
    let targets = lint::collect_targets(Path::new("."), &files)?;
    let mut report = lint::run_lint(Path::new("."), &targets);
    if !stdin.is_empty() {
        let source = lint::read_source(STDIN_NAME).context("reading source from stdin")?;
        let mut all: Vec<FileReport> = report.files;
        all.push(lint::lint_named(STDIN_NAME, &source));
        report = LintReport::new(all);
    }
    Ok(report)
}
