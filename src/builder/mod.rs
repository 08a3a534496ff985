//! Compiler discovery and invocation.

pub mod javac;
pub mod toolchain;

pub use javac::{compile, CompileOutcome};
pub use toolchain::JavaCompiler;
