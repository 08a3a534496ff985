//! The `javac` driver.
//!
//! Assembles the strict option list, runs the compiler synchronously, and
//! parses its stderr into an ordered diagnostic buffer. The buffer is owned
//! by the returned outcome and handed onward by value; nothing shared
//! outlives the invocation.

use std::sync::LazyLock;

use regex::Regex;

use crate::builder::toolchain::JavaCompiler;
use crate::core::errors::BuildError;
use crate::core::profile::strict_profile;
use crate::core::request::BuildRequest;
use crate::util::diagnostic::{Diagnostic, DiagnosticKind};
use crate::util::process::ProcessBuilder;

/// Result of one compiler invocation.
#[derive(Debug)]
pub struct CompileOutcome {
    /// Whether the compiler reported overall success.
    ///
    /// Under the strict profile a single warning flips this to `false`;
    /// that is not an orchestrator failure and the diagnostics are still
    /// reported in full.
    pub success: bool,

    /// Diagnostics in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile the two fixed compilation units under the strict profile.
///
/// Blocks until the compiler finishes. Fails only when the compiler cannot
/// be run at all; a compilation that ran and failed is a normal outcome.
pub fn compile(
    compiler: &JavaCompiler,
    request: &BuildRequest,
) -> Result<CompileOutcome, BuildError> {
    let mut cmd = ProcessBuilder::new(compiler.path());
    for option in strict_profile(request) {
        cmd = cmd.args(option.to_args());
    }
    cmd = cmd.args(request.compilation_units());

    tracing::debug!("running {}", cmd.display_command());

    // The executable was discoverable a moment ago; if it cannot be spawned
    // now the toolchain is as good as absent.
    let output = cmd.exec().map_err(|err| {
        tracing::debug!("failed to run compiler: {err:#}");
        BuildError::ToolchainUnavailable
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let diagnostics = parse_diagnostics(&stderr);

    tracing::debug!(
        "javac exited with {:?}, {} diagnostics",
        output.status.code(),
        diagnostics.len()
    );

    Ok(CompileOutcome {
        success: output.status.success(),
        diagnostics,
    })
}

// `path:line: kind: [code] message`
static POSITIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<path>.+?):(?P<line>\d+):\s*(?P<kind>error|warning|note):\s*(?:\[(?P<code>[^\]]+)\]\s*)?(?P<msg>.*)$",
    )
    .unwrap()
});

// `kind: [code] message`, e.g. the -Werror summary error or an unchecked
// operations note.
static BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?P<kind>error|warning|note):\s*(?:\[(?P<code>[^\]]+)\]\s*)?(?P<msg>.*)$",
    )
    .unwrap()
});

fn kind_from_str(kind: &str) -> DiagnosticKind {
    match kind.to_ascii_lowercase().as_str() {
        "error" => DiagnosticKind::Error,
        "warning" => DiagnosticKind::Warning,
        "note" => DiagnosticKind::Note,
        _ => DiagnosticKind::Other,
    }
}

/// Parse `javac` stderr into an ordered diagnostic sequence.
///
/// Everything that is not a diagnostic is skipped: `-verbose` tracing
/// (bracketed lines), source excerpts, caret lines, and the trailing
/// `N errors` summary.
pub fn parse_diagnostics(stderr: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for line in stderr.lines() {
        if line.starts_with('[') {
            continue;
        }

        if let Some(caps) = POSITIONAL.captures(line) {
            diagnostics.push(Diagnostic {
                kind: kind_from_str(&caps["kind"]),
                code: caps.name("code").map(|m| m.as_str().to_string()),
                source: caps["path"].to_string(),
                line: caps["line"].parse().unwrap_or(0),
                message: caps["msg"].to_string(),
            });
        } else if let Some(caps) = BARE.captures(line) {
            diagnostics.push(Diagnostic {
                kind: kind_from_str(&caps["kind"]),
                code: caps.name("code").map(|m| m.as_str().to_string()),
                source: "<no source>".to_string(),
                line: 0,
                message: caps["msg"].to_string(),
            });
        }
    }

    diagnostics
}
