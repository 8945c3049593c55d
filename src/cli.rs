//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "strudel-lint",
    version,
    about = "Static linter for Strudel pattern code",
    long_about = "strudel-lint — catch synth/sample mix-ups, sandbox escapes, unbalanced quotes and brackets, and out-of-range effects before Strudel code runs.\n\nConfiguration precedence: CLI > strudel-lint.toml > defaults.",
    after_help = "Examples:\n  strudel-lint lint\n  strudel-lint lint songs/*.strudel --output json\n  cat live.strudel | strudel-lint check -\n  strudel-lint check track.strudel --publish",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current strudel-lint version.")]
    Version,
    /// Lint files
    #[command(
        about = "Run lint checks",
        long_about = "Lint files, globs, or stdin (`-`). Without paths, the configured patterns are linted relative to the repo root. Any error exits 1.",
        after_help = "Examples:\n  strudel-lint lint\n  strudel-lint lint a.strudel b.strudel\n  strudel-lint lint --deny-warnings --output json"
    )]
    Lint {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero on warnings too")]
        deny_warnings: bool,
        #[arg(help = "Files or glob patterns; `-` reads stdin")]
        paths: Vec<String>,
    },
    /// Gate one file for playback or publication
    #[command(
        about = "Check a single file before running or publishing it",
        long_about = "Apply the pre-execution guard to one file (or stdin). With --publish, apply the publish gate instead, which reports warnings alongside errors."
    )]
    Check {
        #[arg(help = "File to check; `-` reads stdin")]
        file: String,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Use the publish gate")]
        publish: bool,
    },
    /// List rules
    #[command(about = "List lint rules", long_about = "Print every rule with its id and severity.")]
    Rules {
        #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
