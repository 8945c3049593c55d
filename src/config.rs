//! Configuration discovery and effective settings resolution.
//!
//! strudel-lint reads `strudel-lint.toml|yaml|yml` from the repository root
//! (or closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config. Defaults:
//! - `output`: `human`
//! - `patterns`: `["**/*.strudel"]`
//! - `deny_warnings`: false
//!
//! Overrides precedence: CLI > config file > defaults. The rule tables
//! themselves are fixed and cannot be configured.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: [&str; 3] = ["strudel-lint.toml", "strudel-lint.yaml", "strudel-lint.yml"];
pub const DEFAULT_PATTERN: &str = "**/*.strudel";
pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `strudel-lint.toml|yaml`.
pub struct LintConfig {
    pub output: Option<String>,
    pub patterns: Option<Vec<String>>,
    pub deny_warnings: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub patterns: Vec<String>,
    pub deny_warnings: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a config file or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `LintConfig` from the first config file present in `root`.
pub fn load_config(root: &Path) -> Result<Option<LintConfig>> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<LintConfig>(&s).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<LintConfig>(&s).map_err(|e| e.to_string())
        };
        let cfg = parsed.map_err(|message| Error::Config {
            path: path.clone(),
            message,
        })?;
        log::debug!("loaded config from {}", path.display());
        return Ok(Some(cfg));
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_deny_warnings: Option<bool>,
) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = match load_config(&repo_root)? {
        Some(cfg) => cfg,
        None => {
            log::info!("no strudel-lint config under {}; using defaults", repo_root.display());
            LintConfig::default()
        }
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if !OUTPUT_MODES.contains(&output.as_str()) {
        return Err(Error::Config {
            path: repo_root.clone(),
            message: format!("unknown output mode '{}' (expected human|json)", output),
        });
    }

    let patterns = cfg
        .patterns
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| vec![DEFAULT_PATTERN.to_string()]);

    let deny_warnings = cli_deny_warnings.or(cfg.deny_warnings).unwrap_or(false);

    Ok(Effective {
        repo_root,
        output,
        patterns,
        deny_warnings,
    })
}
