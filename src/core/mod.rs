//! Core types: the build request, the strict option profile, and the error
//! taxonomy.

pub mod errors;
pub mod profile;
pub mod request;

pub use errors::BuildError;
pub use profile::CompilerOption;
pub use request::BuildRequest;
