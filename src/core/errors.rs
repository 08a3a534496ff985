//! Error taxonomy for the orchestrator.
//!
//! Only two kinds of failure are fatal to a run. Compiler diagnostics are
//! data, not errors: a compilation that ran and failed is reported in full
//! and does not surface here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A fatal orchestrator failure.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The purge step hit an I/O error other than "already absent".
    /// Aborts the run before any compilation attempt.
    #[error("failed to purge build output at `{path}`")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No Java compiler could be discovered in the environment.
    /// Aborts after the purge, before any diagnostic is produced.
    #[error("no Java compiler found (set JAVAC or put `javac` on PATH)")]
    ToolchainUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_filesystem_error_carries_source() {
        let err = BuildError::Filesystem {
            path: PathBuf::from("/tmp/bld"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().contains("/tmp/bld"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_toolchain_unavailable_message() {
        let err = BuildError::ToolchainUnavailable;
        assert!(err.to_string().contains("no Java compiler"));
    }
}
