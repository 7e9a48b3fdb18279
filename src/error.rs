//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, AescfbError>`](AescfbError).
//! Underlying I/O errors are kept as the `source`, not repeated in the message.
//!
//! There is no integrity check in the container format, so a wrong key never
//! produces an error: it produces garbage plaintext of the right length.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for all encrypt/decrypt operations.
#[derive(Error, Debug)]
pub enum AescfbError {
    /// The invocation itself is unusable (missing arguments, output would clobber input).
    ///
    /// Raised before any file is opened.
    #[error("invalid arguments: {0}")]
    Argument(String),

    /// The input file could not be opened for reading.
    #[error("cannot open {}", .path.display())]
    CannotOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or truncated.
    #[error("cannot create {}", .path.display())]
    CannotCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input file's metadata could not be read.
    #[error("cannot stat {}", .path.display())]
    CannotStat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read from the input failed for a reason other than end-of-input.
    #[error("read failed")]
    ReadFailed(#[source] io::Error),

    /// A write to (or final flush of) the output failed.
    #[error("write failed")]
    WriteFailed(#[source] io::Error),

    /// The input ended before a complete IV header could be read.
    ///
    /// Any file shorter than 16 bytes is not a valid container.
    #[error("truncated header: expected {expected} bytes, found {found}")]
    TruncatedHeader { expected: usize, found: usize },

    /// The operating system's secure random source could not supply an IV.
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(String),
}

impl AescfbError {
    /// `true` for every filesystem-level failure, including a truncated header.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            AescfbError::CannotOpen { .. }
                | AescfbError::CannotCreate { .. }
                | AescfbError::CannotStat { .. }
                | AescfbError::ReadFailed(_)
                | AescfbError::WriteFailed(_)
                | AescfbError::TruncatedHeader { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_header_message() {
        let err = AescfbError::TruncatedHeader {
            expected: 16,
            found: 5,
        };
        assert_eq!(
            err.to_string(),
            "truncated header: expected 16 bytes, found 5"
        );
        assert!(err.is_io());
    }

    #[test]
    fn open_error_names_the_file() {
        let err = AescfbError::CannotOpen {
            path: PathBuf::from("missing.bin"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "cannot open missing.bin");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "no such file");
    }

    #[test]
    fn entropy_and_argument_are_not_io() {
        assert!(!AescfbError::EntropyUnavailable("rng".into()).is_io());
        assert!(!AescfbError::Argument("too few".into()).is_io());
    }
}
