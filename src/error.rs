use std::io;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while turning capture logs into a dataset artifact.
#[derive(Debug, Error)]
pub enum Error {
    /// A line classified as a reading was missing a delimiter or held a
    /// non-integer field. Fatal for the whole run: silently skipping the
    /// file would finalize an incomplete feature space.
    #[error("parse error in {file} at line {line}: {reason}")]
    Parse {
        /// Name of the capture file being parsed.
        file: String,
        /// 1-based line number of the offending line.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// The pipeline was configured or wired inconsistently.
    #[error("configuration error: {0}")]
    Config(String),
    /// Zero capture files or zero samples; an artifact with empty arrays
    /// is never emitted.
    #[error("no samples in input, refusing to emit an empty dataset")]
    EmptyInput,
    /// Underlying file I/O failure, surfaced as-is.
    #[error(transparent)]
    Io(#[from] io::Error),
}
