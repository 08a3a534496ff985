//! Java toolchain discovery.

use std::env;
use std::path::{Path, PathBuf};

use crate::util::process::find_executable;

/// A discovered Java compiler.
#[derive(Debug, Clone)]
pub struct JavaCompiler {
    path: PathBuf,
}

impl JavaCompiler {
    /// Discover a Java compiler in the execution environment.
    ///
    /// Honors a `JAVAC` environment override before searching PATH.
    /// Returns `None` when no compiler is discoverable; the caller maps
    /// that to a fatal toolchain error.
    pub fn discover() -> Option<Self> {
        if let Ok(javac) = env::var("JAVAC") {
            if let Some(path) = find_executable(&javac) {
                return Some(JavaCompiler { path });
            }
        }

        find_executable("javac").map(|path| JavaCompiler { path })
    }

    /// Path to the compiler executable.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
