//! Error types for the wordlist pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a pipeline run.
///
/// Empty terms produced by adjacent delimiters are not errors; the noise
/// filter drops them silently.
#[derive(Debug, Error)]
pub enum WordlistError {
    /// The corpus file is absent or unreadable. Nothing has been written yet.
    #[error("cannot read corpus {path:?}")]
    InputMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output artifact could not be created or written. Artifacts written
    /// earlier in the same run are left in place.
    #[error("cannot write wordlist {path:?}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl WordlistError {
    pub(crate) fn input_missing(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputMissing {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, WordlistError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_input_missing_keeps_io_source() {
        let err = WordlistError::input_missing(
            "symbol_names.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );

        assert!(err.to_string().contains("symbol_names.txt"));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "no such file");
    }

    #[test]
    fn test_invalid_config_message() {
        let err = WordlistError::InvalidConfig("ratio threshold must be within [0, 1]".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: ratio threshold must be within [0, 1]"
        );
    }
}
