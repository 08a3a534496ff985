//! The build request: every path the orchestrator touches, resolved once.

use std::path::{Path, PathBuf};

/// All paths for one build run.
///
/// Constructed once at process start from the conventional project layout
/// and never re-resolved mid-run.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Root of the module source tree (`src`).
    pub source_root: PathBuf,

    /// The module descriptor, first of the two compilation units.
    pub module_descriptor: PathBuf,

    /// The entry source file, second of the two compilation units.
    pub entry_file: PathBuf,

    /// Build output directory, purged before every invocation.
    pub output_dir: PathBuf,
}

impl BuildRequest {
    /// Build a request from the conventional layout rooted at `project_root`.
    pub fn conventional(project_root: &Path) -> Self {
        BuildRequest {
            source_root: project_root.join("src"),
            module_descriptor: project_root.join("src/main/module-info.java"),
            entry_file: project_root.join("src/main/main/Main.java"),
            output_dir: project_root.join("bld"),
        }
    }

    /// The two compilation units, in submission order.
    pub fn compilation_units(&self) -> [&Path; 2] {
        [&self.module_descriptor, &self.entry_file]
    }
}
