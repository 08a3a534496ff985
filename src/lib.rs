//! Drydock - a minimalist build orchestrator for a single-module Java
//! application.
//!
//! One run performs three steps in strict sequence: purge the stale build
//! output directory, invoke `javac` with a fixed strict option profile, and
//! report every diagnostic the compiler emitted.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

pub use self::core::errors::BuildError;
pub use self::core::profile::{strict_profile, CompilerOption};
pub use self::core::request::BuildRequest;
pub use self::util::diagnostic::{Diagnostic, DiagnosticKind};
