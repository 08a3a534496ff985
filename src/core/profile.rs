//! The strict compiler option profile.
//!
//! These flags are the same ones `javac` takes on its CLI. The posture is
//! deliberately maximal: every warning breaks the build, doc comments are
//! linted in full, and the implicitly loadable runtime modules are limited
//! to the base module. There is exactly one profile; nothing at runtime
//! selects among profiles.

use std::ffi::{OsStr, OsString};

use crate::core::request::BuildRequest;

/// One compiler flag, with its value when the flag takes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOption {
    pub flag: &'static str,
    pub value: Option<OsString>,
}

impl CompilerOption {
    fn bare(flag: &'static str) -> Self {
        CompilerOption { flag, value: None }
    }

    fn valued(flag: &'static str, value: impl Into<OsString>) -> Self {
        CompilerOption {
            flag,
            value: Some(value.into()),
        }
    }

    /// Flatten into command-line arguments.
    pub fn to_args(&self) -> Vec<&OsStr> {
        match &self.value {
            Some(value) => vec![OsStr::new(self.flag), value.as_os_str()],
            None => vec![OsStr::new(self.flag)],
        }
    }
}

/// Build the strict option list for one request.
///
/// The order is fixed; path-bearing flags resolve against the request's
/// paths exactly once.
pub fn strict_profile(request: &BuildRequest) -> Vec<CompilerOption> {
    vec![
        // Input location of all source files; they have to be modules.
        CompilerOption::valued("--module-source-path", request.source_root.as_os_str()),
        // Output class files to the build directory.
        CompilerOption::valued("-d", request.output_dir.as_os_str()),
        // Generate debug info.
        CompilerOption::bare("-g"),
        // Quit on warnings.
        CompilerOption::bare("-Werror"),
        // Warn about malformed docs.
        CompilerOption::bare("-Xdoclint:all"),
        // Use modern docs.
        CompilerOption::valued("--doclint-format", "html5"),
        // The complete lint rule set.
        CompilerOption::bare("-Xlint:all"),
        // Require package-info.java files so generated Javadoc gets package
        // comments.
        CompilerOption::bare("-Xpkginfo:always"),
        // Verbose compiler tracing.
        CompilerOption::bare("-verbose"),
        // Limiting the modules prevents loading of unused ones.
        CompilerOption::valued("--limit-modules", "java.base"),
        // Print uses of deprecated code.
        CompilerOption::bare("-deprecation"),
        // Expected encoding of source files, never the host default.
        CompilerOption::valued("-encoding", "UTF-8"),
    ]
}
