//! Contains [`InstanceError`], the error type for [`super::parser::parse_instance_file`].
use std::fmt;

/// Everything that can go wrong while reading an instance file. Input errors only — the solver
/// itself is never invoked until parsing succeeds (see the crate-level error handling notes).
#[derive(Debug)]
pub enum InstanceError {
    /// The file could not be opened or read.
    Io(std::io::Error),
    /// A section was missing a token, had a token that didn't parse as an integer, or a required
    /// blank-line separator was absent.
    Malformed {
        /// 1-based line number where the problem was detected.
        line: usize,
        /// Human-readable description of what went wrong.
        reason: String,
    },
    /// The declared job count `N` was not a positive integer.
    InvalidJobCount(i64),
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceError::Io(err) => write!(f, "I/O error reading instance file: {err}"),
            InstanceError::Malformed { line, reason } => {
                write!(f, "malformed instance file at line {line}: {reason}")
            }
            InstanceError::InvalidJobCount(n) => {
                write!(f, "invalid job count N={n}: must be a positive integer")
            }
        }
    }
}

impl std::error::Error for InstanceError {}

impl From<std::io::Error> for InstanceError {
    fn from(err: std::io::Error) -> Self {
        InstanceError::Io(err)
    }
}
