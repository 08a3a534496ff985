//! The purge -> compile -> report pipeline.
//!
//! Strictly sequential: each step consumes the previous step's output and
//! nothing runs concurrently. The only fatal transitions are a purge I/O
//! failure and an undiscoverable toolchain; a compilation that ran and
//! failed still gets its diagnostics reported and is a normal outcome.

use crate::builder::javac;
use crate::builder::toolchain::JavaCompiler;
use crate::core::errors::BuildError;
use crate::core::request::BuildRequest;
use crate::util::diagnostic;
use crate::util::fs::purge_dir;

/// Terminal result of a run that was not fatally aborted.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Whether the compilation succeeded.
    pub success: bool,

    /// Number of diagnostic lines written to stderr.
    pub reported: usize,
}

/// Run one build: purge the output directory, compile, report.
pub fn execute(request: &BuildRequest) -> Result<BuildOutcome, BuildError> {
    tracing::debug!("purging {}", request.output_dir.display());
    purge_dir(&request.output_dir).map_err(|source| BuildError::Filesystem {
        path: request.output_dir.clone(),
        source,
    })?;

    // The purge precedes the availability check: a run with no discoverable
    // compiler still leaves the output directory purged.
    let compiler = JavaCompiler::discover().ok_or(BuildError::ToolchainUnavailable)?;
    tracing::debug!("using compiler at {}", compiler.path().display());

    let outcome = javac::compile(&compiler, request)?;

    // Draining is unconditional, pass or fail.
    diagnostic::emit_all(&outcome.diagnostics);

    Ok(BuildOutcome {
        success: outcome.success,
        reported: outcome.diagnostics.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_purge_failure_aborts_before_compilation() {
        let tmp = TempDir::new().unwrap();
        let request = BuildRequest::conventional(tmp.path());

        // The output path exists but is a regular file.
        fs::write(&request.output_dir, b"stale").unwrap();

        let err = execute(&request).unwrap_err();
        assert!(matches!(err, BuildError::Filesystem { .. }));
        assert!(request.output_dir.exists());
    }

    #[test]
    #[ignore] // Requires a JDK
    fn test_missing_sources_still_reach_a_terminal_state() {
        let tmp = TempDir::new().unwrap();
        let request = BuildRequest::conventional(tmp.path());

        // No source tree at all: the compiler runs and fails, which is a
        // reported outcome rather than a fatal error.
        let outcome = execute(&request).unwrap();
        assert!(!outcome.success);
    }
}
