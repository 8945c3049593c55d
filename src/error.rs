//! Error type for the file, config, and pattern handling around the analyzer.
//!
//! The analyzer itself never fails; these cover everything the CLI does
//! before and after calling it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A source or config file could not be read
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file exists but is not usable
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A file pattern is not a valid glob
    #[error("bad glob pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
