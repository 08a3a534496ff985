//! Compiler diagnostics and the line-per-diagnostic reporter.
//!
//! The reporter is the only place detailed build information surfaces.
//! Diagnostics are written to stderr strictly in emission order: no sorting
//! by severity, code, or location, no deduplication, no filtering of
//! advisory entries.

use std::fmt;
use std::io::{self, Write};

/// Severity kind of a compiler diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Error,
    Warning,
    Note,
    Other,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Error => write!(f, "ERROR"),
            DiagnosticKind::Warning => write!(f, "WARNING"),
            DiagnosticKind::Note => write!(f, "NOTE"),
            DiagnosticKind::Other => write!(f, "OTHER"),
        }
    }
}

/// One structured message from the compiler.
///
/// Produced during invocation, handed to the reporter by value, never
/// retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Lint category when the compiler named one, e.g. `deprecation`.
    pub code: Option<String>,
    /// Source file name, or `<no source>` for position-less messages.
    pub source: String,
    /// 1-based line number; 0 when the message carries no position.
    pub line: u32,
    pub message: String,
}

impl Diagnostic {
    /// Render the single report line for this diagnostic.
    ///
    /// Format: `<KIND> [<CODE-or-->] '<source>:<line>' MSG: <message>`
    pub fn format_line(&self) -> String {
        format!(
            "{} [{}] '{}:{}' MSG: {}",
            self.kind,
            self.code.as_deref().unwrap_or("-"),
            self.source,
            self.line,
            self.message
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_line())
    }
}

/// Drain a diagnostic sequence to a writer, one line each, in order.
pub fn report<W: Write>(diagnostics: &[Diagnostic], out: &mut W) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "{}", diagnostic.format_line())?;
    }
    Ok(())
}

/// Drain a diagnostic sequence to stderr.
pub fn emit_all(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.format_line());
    }
}
